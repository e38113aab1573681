use crate::config::Config;
use album_client::AlbumClient;
use getset::Getters;
use log::info;
use std::sync::Arc;

#[derive(Getters)]
#[get = "pub"]
pub struct Context {
    album_client: AlbumClient,
    config: Config,
}

impl Context {
    pub fn new(album_client: AlbumClient, config: Config) -> Self {
        info!("Initialized AlbumClient against {}", config.api_url());

        Self {
            album_client,
            config,
        }
    }
}

pub type ContextPointer = Arc<Context>;
