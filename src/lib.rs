pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod seed;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod sign_up {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod withdraw {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod directory;
                pub mod directory_in_memory;
            }
        }
    }
}

pub mod shell;
