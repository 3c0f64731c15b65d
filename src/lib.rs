pub mod shared {
    pub mod core {
        pub mod primitives;
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod predictions {
        pub mod core {
            pub mod classifier;
            pub mod prediction;
        }
        pub mod use_cases {
            pub mod classify_text {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_stats {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod describe_model {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod keyword_classifier;
                pub mod stats_queries;
            }
        }
    }
    pub mod feedback {
        pub mod core {
            pub mod feedback;
        }
        pub mod use_cases {
            pub mod submit_feedback {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_feedback {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod feedback_queries;
            }
        }
    }
}

pub mod shell;
