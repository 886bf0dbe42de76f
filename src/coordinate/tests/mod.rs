mod coordinate_tests;
mod pair_tests;
