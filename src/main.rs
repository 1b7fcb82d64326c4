#[macro_use]
extern crate rocket;

use std::process;

use rocket::http::Method;
use rocket::{Build, Rocket};

use crate::config::{parse_config, FileServerConfig, ServerVariant};
use crate::handler::{
    catchers::default_catcher, file_handler::create_file, method_gate::MethodGate,
    static_files::StaticFiles,
};
use crate::repository::FileRepository;

mod config;
mod handler;
mod logger;
mod model;
mod repository;
mod service;
mod startup;
#[cfg(test)]
mod test;

#[launch]
fn rocket() -> Rocket<Build> {
    let config = match parse_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to parse config file. Exception is {e}");
            process::exit(1);
        }
    };
    logger::init_logger(&config.log.level);
    startup::announce(&config);
    startup::list_files(&FileRepository::new(&config.storage.root));
    if config.verify_location() {
        let argv0 = std::env::args_os().next();
        if let Err(e) = startup::verify_location(&config.expected_location(), argv0.as_deref()) {
            log::error!("{e}");
            process::exit(1);
        }
    }
    log::info!("» Starting up on port :{}...", config.port());
    build_rocket(config)
}

/// builds the server for whichever variant `config` asks for. Routes are all registered here and never change afterward
pub fn build_rocket(config: FileServerConfig) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", config.port()))
        .merge(("address", config.address()))
        .merge(("log_level", logger::rocket_log_level(&config.log.level)));
    let repository = FileRepository::new(&config.storage.root);
    let rocket = rocket::custom(figment)
        .manage(repository.clone())
        .register("/", catchers![default_catcher]);
    let rocket = match config.server.variant {
        ServerVariant::Combined => rocket
            .mount("/api/v1", routes![create_file])
            .mount("/api/v1", MethodGate::new("/create/file", &[Method::Post]))
            .mount("/api/v1/file", StaticFiles::any_method(repository)),
        ServerVariant::ReadOnly => rocket
            .mount("/api/v1/file", StaticFiles::get_only(repository))
            .mount("/api/v1/file", MethodGate::new("/<path..>", &[Method::Get])),
    };
    rocket.manage(config)
}
