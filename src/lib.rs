// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod messages;
    pub mod ports;
    pub mod projector;
    pub mod spot;
    pub mod swipe;
}

pub mod application {
    pub mod errors;
    pub mod swipe_log;
    pub mod sync {
        pub mod collection_sync;
    }
    pub mod pages {
        pub mod admin;
        pub mod explore;
        pub mod swipe;
    }
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_auth;
        pub mod in_memory_collection;
        pub mod in_memory_key_value_store;
    }
    pub mod file {
        pub mod file_key_value_store;
    }
}

pub mod shell;
