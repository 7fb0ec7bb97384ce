//! One `Client` method per remote endpoint, grouped by resource.

mod account;
mod assets;
mod canvas;
mod custom_models;
mod datasets;
mod generations;
mod init_images;
mod prompt;
mod variations;
