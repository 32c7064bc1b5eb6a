pub const PING: &str = r#"
SELECT 1;
"#;

pub const SELECT_AIRPORTS: &str = r#"
SELECT iata_code, airport_name, city, country, airport_status, timezone
FROM airports
ORDER BY iata_code;
"#;

pub const SELECT_FLIGHTS: &str = r#"
SELECT id, flight_number, airline_code, origin_code, destination_code, aircraft_icao_code,
       scheduled_departure_time, scheduled_arrival_time, status_id, created_at, updated_at
FROM flights
ORDER BY scheduled_departure_time NULLS LAST, id;
"#;

pub const SELECT_FLIGHT_STATUSES: &str = r#"
SELECT id, status_code, status_name, description, id_status_code
FROM flight_status
ORDER BY id;
"#;

pub const SELECT_NOTICES: &str = r#"
SELECT n.id, n.airport_code, n.city, n.message, a.airport_name, n.created_at, n.updated_at
FROM notams n
LEFT JOIN airports a ON a.iata_code = n.airport_code
ORDER BY n.created_at DESC, n.id DESC;
"#;

pub const SELECT_NOTICE_BY_ID: &str = r#"
SELECT n.id, n.airport_code, n.city, n.message, a.airport_name, n.created_at, n.updated_at
FROM notams n
LEFT JOIN airports a ON a.iata_code = n.airport_code
WHERE n.id = $1;
"#;

/// Serializes duplicate checks per airport until the transaction ends.
pub const LOCK_NOTICE_AIRPORT: &str = r#"
SELECT pg_advisory_xact_lock(hashtext($1));
"#;

pub const NOTICE_EXISTS: &str = r#"
SELECT EXISTS (SELECT 1 FROM notams WHERE airport_code = $1 AND message = $2);
"#;

pub const INSERT_NOTICE: &str = r#"
WITH inserted AS (
    INSERT INTO notams (airport_code, city, message)
    VALUES ($1, $2, $3)
    RETURNING id, airport_code, city, message, created_at, updated_at
)
SELECT i.id, i.airport_code, i.city, i.message, a.airport_name, i.created_at, i.updated_at
FROM inserted i
LEFT JOIN airports a ON a.iata_code = i.airport_code;
"#;

pub const UPDATE_NOTICE_MESSAGE: &str = r#"
WITH updated AS (
    UPDATE notams
    SET message = $2,
        updated_at = NOW()
    WHERE id = $1
    RETURNING id, airport_code, city, message, created_at, updated_at
)
SELECT u.id, u.airport_code, u.city, u.message, a.airport_name, u.created_at, u.updated_at
FROM updated u
LEFT JOIN airports a ON a.iata_code = u.airport_code;
"#;

pub const DELETE_NOTICE: &str = r#"
WITH deleted AS (
    DELETE FROM notams
    WHERE id = $1
    RETURNING id, airport_code, city, message, created_at, updated_at
)
SELECT d.id, d.airport_code, d.city, d.message, a.airport_name, d.created_at, d.updated_at
FROM deleted d
LEFT JOIN airports a ON a.iata_code = d.airport_code;
"#;

pub const UPDATE_FLIGHT_STATUS: &str = r#"
UPDATE flights
SET status_id = $1,
    updated_at = NOW()
WHERE id = ANY($2)
RETURNING id, flight_number, airline_code, origin_code, destination_code, aircraft_icao_code,
          scheduled_departure_time, scheduled_arrival_time, status_id, created_at, updated_at;
"#;

pub const UPSERT_FLIGHT_ANNOUNCEMENT: &str = r#"
INSERT INTO flight_announcements (
    flight_id, flight_number, airline_code, origin_code, destination_code, status_id, status_text, updated_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
ON CONFLICT (flight_id) DO UPDATE
SET flight_number = $2,
    airline_code = $3,
    origin_code = $4,
    destination_code = $5,
    status_id = $6,
    status_text = $7,
    updated_at = $8;
"#;
