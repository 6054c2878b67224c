pub mod application {
    pub mod catalog {
        pub mod food;
        pub mod store;
    }
    pub mod nutrition {
        pub mod analyze;
    }
    pub mod store {
        pub mod recommend;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod food {
        pub mod catalog;
        pub mod groups;
        pub mod model;
        pub mod repository;
    }
    pub mod ingredient {
        pub mod freshness;
        pub mod model;
        pub mod units;
    }
    pub mod nutrition {
        pub mod calculator;
        pub mod errors;
        pub mod gaps;
        pub mod model;
        pub mod recommendation;
        pub mod use_cases {
            pub mod analyze;
        }
    }
    pub mod profile {
        pub mod errors;
        pub mod model;
        pub mod normalize;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod shared {
        pub mod cache;
        pub mod rounding;
        pub mod value_objects;
    }
    pub mod store {
        pub mod errors;
        pub mod model;
        pub mod ranking;
        pub mod repository;
        pub mod services;
        pub mod walking;
        pub mod use_cases {
            pub mod recommend;
        }
    }
}
