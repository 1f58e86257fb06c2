use argon2::{Algorithm, Argon2, Params, Version};

/// Cheap Argon2 parameters so tests stay fast.
pub fn fast_hasher() -> Argon2<'static> {
    Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(1024, 1, 1, None).unwrap(),
    )
}
