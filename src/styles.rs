/// Shared Tailwind class constants.
pub mod styles {
    pub const SPACE_Y_6: &str = "space-y-6";
}

/// Common class combinations.
pub mod combinations {
    // Card styles
    pub const CARD: &str = "bg-white rounded-lg shadow-sm border border-gray-200";
    pub const CARD_HEADER: &str = "px-6 py-4 border-b border-gray-200";
    pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900";

    // Button styles
    pub const BUTTON_PRIMARY: &str =
        "px-6 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors font-medium";
    pub const BUTTON_SECONDARY: &str =
        "px-6 py-2 bg-white text-gray-700 border border-gray-300 rounded-md hover:bg-gray-50 transition-colors font-medium";
    pub const BUTTON_DANGER: &str =
        "px-6 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 transition-colors font-medium";
    pub const BUTTON_PAGER: &str =
        "p-2 rounded text-gray-600 hover:bg-gray-100 disabled:opacity-50 disabled:cursor-not-allowed";

    // Input styles
    pub const INPUT: &str =
        "w-full text-sm p-2 rounded border border-gray-300 bg-white focus:outline-none focus:border-blue-500";
    pub const INPUT_INVALID: &str =
        "w-full text-sm p-2 rounded border border-red-400 bg-white focus:outline-none focus:border-red-500";
    pub const FIELD_LABEL: &str = "text-sm font-medium text-gray-700";
    pub const FIELD_ERROR: &str = "text-sm text-red-500";

    // Layout styles
    pub const PAGE_CONTAINER: &str = "space-y-6";

    // State styles
    pub const LOADING: &str = "text-center py-8 text-gray-500";
    pub const ERROR: &str = "text-red-500 p-4 bg-red-50 border border-red-200 rounded";

    // List styles
    pub const LIST_ITEM: &str = "flex justify-between items-center py-2 border-b border-gray-200 last:border-b-0";
    pub const LIST_ITEM_LABEL: &str = "font-medium text-gray-700";
    pub const LIST_ITEM_VALUE: &str = "text-sm text-gray-900 break-all text-right";

    // Table styles
    pub const TABLE_CONTAINER: &str = "overflow-x-auto bg-white rounded-lg shadow";
    pub const TABLE: &str = "min-w-full border border-gray-200";
    pub const TABLE_HEADER: &str = "bg-gray-200 text-gray-700";
    pub const TABLE_HEADER_CELL: &str = "px-4 py-2 text-left border-b";
    pub const TABLE_ROW: &str = "hover:bg-gray-50";
    pub const TABLE_CELL: &str = "px-4 py-2 border-b text-sm truncate";

    // Status badge styles
    pub const BADGE_WARN: &str = "px-4 py-0.5 rounded-2xl shadow-lg bg-amber-300";
    pub const BADGE_OK: &str = "px-4 py-0.5 rounded-2xl shadow-lg bg-green-300";

    // Action icon styles
    pub const ACTION_ICON: &str = "text-blue-900 cursor-pointer hover:text-blue-600";
}
