// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod bills_json_datasource;
        pub(crate) mod memory_storage;
    }
    pub(crate) mod models {
        pub(crate) mod bill_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod memory_bills_store;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod bill;
        pub(crate) mod navigation;
        pub(crate) mod route;
        pub(crate) mod session_user;
    }
    pub(crate) mod logic {
        pub(crate) mod bills_formatter;
        pub(crate) mod format;
        pub(crate) mod session;
    }
    pub(crate) mod repositories {
        pub(crate) mod bills_store;
        pub(crate) mod key_value_storage;
    }
    pub(crate) mod usecases {
        pub(crate) mod create_bill_usecase;
        pub(crate) mod get_bills_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod containers {
        pub(crate) mod bills_container;
        pub(crate) mod dashboard_container;
        pub(crate) mod new_bill_container;
    }
    pub(crate) mod views {
        pub(crate) mod bills_view;
        pub(crate) mod dashboard_view;
        pub(crate) mod error_view;
        pub(crate) mod loading_view;
        pub(crate) mod login_view;
        pub(crate) mod new_bill_view;
        mod vertical_layout;
    }
    pub(crate) mod document;
    pub(crate) mod router;
    mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::bill::*;
        pub use crate::domain::entities::navigation::*;
        pub use crate::domain::entities::route::*;
        pub use crate::domain::entities::session_user::*;
    }

    pub mod format {
        pub use crate::domain::logic::format::*;
    }

    pub mod session {
        pub use crate::domain::logic::session::*;
    }

    pub mod store {
        pub use crate::data::datasources::memory_storage::*;
        pub use crate::data::repositories::memory_bills_store::*;
        pub use crate::domain::repositories::bills_store::*;
        pub use crate::domain::repositories::key_value_storage::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::create_bill_usecase::CreateBillUsecase;
        pub use crate::domain::usecases::get_bills_usecase::GetBillsUsecase;
    }

    pub mod containers {
        pub use crate::presentation::containers::bills_container::*;
        pub use crate::presentation::containers::dashboard_container::*;
        pub use crate::presentation::containers::new_bill_container::*;
    }

    pub mod views {
        pub mod bills_view {
            pub use crate::presentation::views::bills_view::*;
        }
        pub mod dashboard_view {
            pub use crate::presentation::views::dashboard_view::*;
        }
        pub mod error_view {
            pub use crate::presentation::views::error_view::*;
        }
        pub mod loading_view {
            pub use crate::presentation::views::loading_view::*;
        }
        pub mod login_view {
            pub use crate::presentation::views::login_view::*;
        }
        pub mod new_bill_view {
            pub use crate::presentation::views::new_bill_view::*;
        }
    }

    pub mod document {
        pub use crate::presentation::document::*;
    }

    pub mod router {
        pub use crate::presentation::router::*;
    }
}
