// src/resumes/tests/mod.rs

mod handlers_tests;
