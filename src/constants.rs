//! Application-wide constants
//!
//! This module contains the string literals and defaults used throughout
//! the engine, providing a single source of truth for constant values.

/// Settings-store key layout
pub mod storage {
    /// Directory under the platform config dir holding the settings store
    pub const APP_DIR: &str = "print-rename";

    /// Settings store filename
    pub const FILENAME: &str = "settings.json";

    /// Key prefix for named preset blobs (`Preset_<name>`)
    pub const PRESET_KEY_PREFIX: &str = "Preset_";

    /// Key for the index blob listing custom preset names
    pub const CUSTOM_PRESET_INDEX_KEY: &str = "CustomPresetNames";

    /// Key for the currently-active configuration blob
    pub const CURRENT_CONFIG_KEY: &str = "CurrentConfiguration";
}

/// Preset namespace constants
pub mod presets {
    /// The built-in preset synthesized from catalog defaults
    pub const FULL_FEATURE_SET: &str = "Full Feature Set";

    /// Built-in names shipped by earlier releases; stale custom-name indexes
    /// may still carry them, so listings filter them out
    pub const LEGACY_BUILTINS: [&str; 2] = ["Standard Layout", "Minimal"];
}

/// Reserved and default token names
pub mod tokens {
    /// Reserved item name replaced by a dimension-code rendering
    pub const DIMENSIONS: &str = "Dimensions";

    /// Default token filled from the order number column
    pub const ORDER_NUMBER: &str = "Order Number";

    pub const MATERIAL: &str = "Material";
    pub const QUANTITY: &str = "Quantity";
    pub const PROCESS: &str = "Process";
    pub const CUSTOMER: &str = "Customer";
    pub const REMARK: &str = "Remark";
    pub const ROW: &str = "Row";
    pub const COLUMN: &str = "Column";
}

/// Default shape-code suffixes for the dimension codec
pub mod dimension {
    /// Suffix for a zero corner radius (`shape == "0"`)
    pub const ZERO_CODE: &str = "J";

    /// Suffix for a rounded corner with a numeric radius
    pub const ROUND_CODE: &str = "R";

    /// Suffix for an elliptical die cut (`shape == "Y"`)
    pub const ELLIPSE_CODE: &str = "Y";

    /// Suffix for a circular die cut (`shape == "R"`)
    pub const CIRCLE_CODE: &str = "O";
}
