pub mod application {
    pub mod suggestion {
        pub mod suggest;
    }
}

pub mod domain {
    pub mod logger;
    pub mod menu {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod suggestion {
        pub mod config;
        pub mod context;
        pub mod errors;
        pub mod messages;
        pub mod model;
        pub mod scoring;
        pub mod services;
        pub mod signals;
        pub mod use_cases {
            pub mod suggest;
        }
    }
}
