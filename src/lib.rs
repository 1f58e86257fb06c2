pub mod modules {
    pub mod registration {
        pub mod core {
            pub mod form;
            pub mod notices;
            pub mod request;
            pub mod response;
        }
        pub mod use_cases {
            pub mod submit_registration {
                pub mod event;
                pub mod handler;
                pub mod outcome;
                pub mod ports;
                pub mod inbound {
                    pub mod bindings;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod http_gateway;
                pub mod page_effects_console;
            }
            pub mod in_memory {
                pub mod form_fields_in_memory;
                pub mod gateway_in_memory;
                pub mod page_effects_in_memory;
            }
        }
    }
    pub mod accounts {
        pub mod core {
            pub mod account;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod register_account {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                    pub mod page;
                }
            }
        }
        pub mod adapters {
            pub mod in_memory {
                pub mod in_memory_accounts;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures;
}
