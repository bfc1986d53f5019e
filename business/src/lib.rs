pub mod application {
    pub mod fridge_item {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod fridge_item {
        pub mod errors;
        pub mod expiry;
        pub mod model;
        pub mod repository;
        pub mod severity;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod update;
        }
    }
}
