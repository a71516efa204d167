mod console;
mod helpers;
mod paths;
