mod common;
mod explain;
mod features;
mod import;
