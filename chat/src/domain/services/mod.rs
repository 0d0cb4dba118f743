mod avatar;

pub use avatar::AvatarChain;
