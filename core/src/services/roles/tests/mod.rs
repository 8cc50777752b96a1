mod resolver_tests;
mod role_tests;
