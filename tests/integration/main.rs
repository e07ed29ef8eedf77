//! Integration tests driving the router in-process

mod api_tests;
