mod shape_attributes_tests;
