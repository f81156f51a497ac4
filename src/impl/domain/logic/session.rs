use fractic_server_error::ServerError;

use crate::{
    domain::repositories::key_value_storage::KeyValueStorage,
    entities::SessionUser,
    errors::InvalidJson,
};

pub const USER_KEY: &str = "user";

/// Reads the signed-in user. `Ok(None)` when nobody is signed in.
pub fn load_user(storage: &dyn KeyValueStorage) -> Result<Option<SessionUser>, ServerError> {
    storage
        .get_item(USER_KEY)
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|e| InvalidJson::with_debug("session user", &e))
        })
        .transpose()
}

pub fn store_user(storage: &dyn KeyValueStorage, user: &SessionUser) -> Result<(), ServerError> {
    let raw =
        serde_json::to_string(user).map_err(|e| InvalidJson::with_debug("session user", &e))?;
    storage.set_item(USER_KEY, &raw);
    Ok(())
}

pub fn clear_user(storage: &dyn KeyValueStorage) {
    storage.remove_item(USER_KEY);
}
