mod placement_tests;
