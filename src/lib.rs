pub mod shared {
    pub mod core {
        pub mod calendar;
        pub mod grouping;
        pub mod rounding;
    }
}

pub mod modules {
    pub mod tracking {
        pub mod core {
            pub mod catalog;
            pub mod entry;
        }
        pub mod repository_port;
        pub mod use_cases {
            pub mod register_entry {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod process_entry {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod store_in_memory;
            }
        }
    }

    pub mod reporting {
        pub mod core {
            pub mod rows;
        }
        pub mod queries_port;
        pub mod use_cases {
            pub mod executive_report {
                pub mod builder;
                pub mod export;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manager_report {
                pub mod builder;
                pub mod export;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod project_report {
                pub mod builder;
                pub mod export;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod dashboard {
                pub mod consultant;
                pub mod director;
                pub mod manager;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod export {
            pub mod csv;
        }
    }

    pub mod notifications {
        pub mod adapters {
            pub mod in_memory;
        }
        pub mod port;
    }

    pub mod directory {
        pub mod adapters {
            pub mod in_memory;
        }
        pub mod provisioning_port;
        pub mod use_cases {
            pub mod create_user {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
