mod host_lifecycle_tests;
