pub mod configuration;

pub mod time {
    pub mod weekspan;
}
