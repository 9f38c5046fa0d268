pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod cloud_game_payload_datasource;
        pub(crate) mod launch_event_payload_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod cloud_game {
            pub(crate) mod startup_payload_model;
        }
        pub(crate) mod launch_event {
            pub(crate) mod app_link_extras_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod payload_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod gaming_payload;
        pub mod launch_event;
        pub mod session_context;
    }
    pub mod repositories {
        pub mod payload_repository;
    }
}

pub mod errors;
pub mod util;
