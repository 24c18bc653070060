use super::*;

/// Idempotent drops. The fact table goes ahead of the dimensions it
/// references; staging tables carry no constraints and can go first.
pub const DROPS: [&str; 7] = [
    const_format::concatcp!("DROP TABLE IF EXISTS ", STAGING_EVENTS),
    const_format::concatcp!("DROP TABLE IF EXISTS ", STAGING_SONGS),
    const_format::concatcp!("DROP TABLE IF EXISTS ", SONGPLAYS),
    const_format::concatcp!("DROP TABLE IF EXISTS ", USERS),
    const_format::concatcp!("DROP TABLE IF EXISTS ", SONGS),
    const_format::concatcp!("DROP TABLE IF EXISTS ", ARTISTS),
    const_format::concatcp!("DROP TABLE IF EXISTS ", TIME),
];

/// Idempotent creates. Dimensions go ahead of the fact table so its
/// foreign keys resolve; staging columns are all nullable scratch space.
pub const CREATES: [&str; 7] = [
    CREATE_STAGING_EVENTS,
    CREATE_STAGING_SONGS,
    CREATE_USERS,
    CREATE_SONGS,
    CREATE_ARTISTS,
    CREATE_TIME,
    CREATE_SONGPLAYS,
];

const CREATE_STAGING_EVENTS: &str = const_format::concatcp!(
    "CREATE TABLE IF NOT EXISTS ",
    STAGING_EVENTS,
    " (
    artist VARCHAR,
    auth VARCHAR,
    firstName VARCHAR,
    gender CHAR(1),
    itemInSession INT,
    lastName VARCHAR,
    length DOUBLE PRECISION,
    level VARCHAR,
    location VARCHAR,
    method VARCHAR,
    page VARCHAR,
    registration BIGINT,
    sessionId BIGINT,
    song VARCHAR,
    status INT,
    ts DOUBLE PRECISION,
    userAgent VARCHAR,
    userId BIGINT
)"
);

const CREATE_STAGING_SONGS: &str = const_format::concatcp!(
    "CREATE TABLE IF NOT EXISTS ",
    STAGING_SONGS,
    " (
    artist_location VARCHAR,
    song_id VARCHAR,
    num_songs INT,
    title VARCHAR,
    duration DOUBLE PRECISION,
    artist_latitude DOUBLE PRECISION,
    artist_name VARCHAR,
    year INT,
    artist_id VARCHAR,
    artist_longitude DOUBLE PRECISION
)"
);

const CREATE_USERS: &str = const_format::concatcp!(
    "CREATE TABLE IF NOT EXISTS ",
    USERS,
    " (
    user_id BIGINT PRIMARY KEY SORTKEY,
    first_name VARCHAR NOT NULL,
    last_name VARCHAR NOT NULL,
    gender CHAR(1),
    level VARCHAR,
    CONSTRAINT users_name_level_uniqe UNIQUE (user_id, level)
) DISTSTYLE ALL;"
);

const CREATE_SONGS: &str = const_format::concatcp!(
    "CREATE TABLE IF NOT EXISTS ",
    SONGS,
    " (
    song_id VARCHAR PRIMARY KEY SORTKEY,
    title VARCHAR,
    artist_id VARCHAR,
    year INT,
    duration DOUBLE PRECISION
) DISTSTYLE ALL;"
);

const CREATE_ARTISTS: &str = const_format::concatcp!(
    "CREATE TABLE IF NOT EXISTS ",
    ARTISTS,
    " (
    artist_id VARCHAR PRIMARY KEY SORTKEY,
    name VARCHAR NOT NULL,
    location VARCHAR,
    latitude DOUBLE PRECISION,
    longitude DOUBLE PRECISION
) DISTSTYLE ALL;"
);

const CREATE_TIME: &str = const_format::concatcp!(
    "CREATE TABLE IF NOT EXISTS ",
    TIME,
    " (
    start_time TIMESTAMP PRIMARY KEY SORTKEY,
    hour INT NOT NULL,
    day INT NOT NULL,
    week INT NOT NULL,
    month INT NOT NULL,
    year INT NOT NULL,
    weekday INT NOT NULL
) DISTSTYLE ALL;"
);

const CREATE_SONGPLAYS: &str = const_format::concatcp!(
    "CREATE TABLE IF NOT EXISTS ",
    SONGPLAYS,
    " (
    songplay_id BIGINT IDENTITY(0,1) SORTKEY DISTKEY,
    start_time TIMESTAMP,
    user_id BIGINT NOT NULL,
    level VARCHAR,
    song_id VARCHAR NOT NULL,
    artist_id VARCHAR NOT NULL,
    session_id BIGINT,
    location VARCHAR,
    user_agent VARCHAR,
    FOREIGN KEY (user_id) REFERENCES users (user_id),
    FOREIGN KEY (song_id) REFERENCES songs (song_id),
    FOREIGN KEY (artist_id) REFERENCES artists (artist_id)
)"
);
