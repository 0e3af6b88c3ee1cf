mod admin_flow_tests;
mod backend_tests;
mod learning_flow_tests;
