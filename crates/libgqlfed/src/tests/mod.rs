mod reference_graph_tests;
mod scanner_tests;
mod sdl_parser_error_tests;
mod utils;
