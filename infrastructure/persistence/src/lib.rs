pub mod db;
pub mod food {
    pub mod entity;
    pub mod repository;
}
pub mod profile {
    pub mod entity;
    pub mod repository;
}
pub mod store {
    pub mod entity;
    pub mod repository;
}
