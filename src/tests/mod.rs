mod clock_tests;
mod edge_case_tests;
