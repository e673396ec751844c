mod room;

pub use room::{create_room_scene, RoomScene};
