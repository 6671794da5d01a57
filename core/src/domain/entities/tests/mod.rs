mod job_tests;
mod token_tests;
