use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });

// Store-related.
define_client_error!(StoreRequestFailed, "{message}", { message: &str });
define_client_error!(BillNotFound, "Bill '{key}' not found.", { key: &str });

// Receipt upload.
define_client_error!(
    UnsupportedFileExtension,
    "Unsupported receipt file '{file_name}'. Accepted extensions: {accepted}.",
    { file_name: &str, accepted: &str }
);

// Navigation.
define_internal_error!(
    NavigatorReleased,
    "Navigation context was dropped while a view was still using it."
);
