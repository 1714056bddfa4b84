//! Centralized icon definitions.
//!
//! The theme is picked in `config.rs` via `ICON_THEME`; this module maps
//! semantic names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as Up, LuChevronRight as ChevronRight, LuFile as File,
        LuFilePlus as FilePlus, LuFileText as FileText, LuFolder as Folder,
        LuFolderPlus as FolderPlus, LuHouse as Home, LuLogOut as Logout, LuPencil as Edit,
        LuRefreshCw as Refresh, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowUp as Up, BsBoxArrowRight as Logout,
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFileEarmarkPlus as FilePlus,
        BsFileEarmarkText as FileText, BsFolderFill as Folder, BsFolderPlus as FolderPlus,
        BsHouseFill as Home, BsPencil as Edit, BsPerson as User, BsXLg as Close,
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

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(EDIT, Edit);
themed_icon!(FILE, File);
themed_icon!(FILE_PLUS, FilePlus);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_PLUS, FolderPlus);
themed_icon!(HOME, Home);
themed_icon!(LOGOUT, Logout);
themed_icon!(REFRESH, Refresh);
themed_icon!(UP, Up);
themed_icon!(USER, User);
