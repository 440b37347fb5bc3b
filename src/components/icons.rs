//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCircleAlert as Error, LuCircleCheck as Success, LuDownload as Download,
        LuInfo as Info, LuLayoutGrid as Grid, LuList as List, LuMenu as Menu,
        LuPrinter as Print, LuSend as Send, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckCircle as Success, BsDownload as Download, BsExclamationCircle as Error,
        BsGrid as Grid, BsInfoCircle as Info, BsList as Menu, BsListUl as List,
        BsPrinter as Print, BsSend as Send, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(GRID, Grid);
themed_icon!(LIST, List);
themed_icon!(PRINT, Print);
themed_icon!(DOWNLOAD, Download);
themed_icon!(SEND, Send);
themed_icon!(INFO, Info);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);
