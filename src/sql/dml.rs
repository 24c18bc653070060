/// Dimension inserts: rows present in staging but absent from the
/// dimension table, one winner per natural key.
///
/// Dedup contract across this file: partition candidates by the natural
/// key, order by the secondary key descending, keep rank 1. Users break
/// ties on event timestamp, songs on artist id, artists on artist name.
/// Time needs no ranking since DISTINCT timestamps are already unique.
pub const INSERTS: [&str; 4] = [USER_INSERT, SONG_INSERT, ARTIST_INSERT, TIME_INSERT];

/// Dimension refreshes for natural keys already present, same ranking
/// rule, restricted to the rank-1 candidate per key.
pub const UPDATES: [&str; 3] = [USER_UPDATE, SONG_UPDATE, ARTIST_UPDATE];

/// Fact derivation. Events that resolve no song/artist pair by the exact
/// name, title, and duration triple are excluded by the inner join, not
/// errored.
pub const FACTS: [&str; 1] = [SONGPLAY_INSERT];

const USER_INSERT: &str = r#"
INSERT INTO users (user_id, first_name, last_name, gender, level)
    WITH users_ranked AS (
          SELECT
                 userid,
                 firstname,
                 lastname,
                 gender,
                 level,
                 ROW_NUMBER() OVER (PARTITION BY userid ORDER BY userid, ts DESC) AS userid_ranked
          FROM
                 staging_events
          WHERE
                 page = 'NextSong'
                   AND
                 userid NOT IN (SELECT user_id FROM users)
    ) SELECT
           userid AS user_id,
           firstname AS first_name,
           lastname AS last_name,
           gender,
           level
    FROM
           users_ranked
    WHERE
           users_ranked.userid_ranked = 1;
"#;

const SONG_INSERT: &str = r#"
INSERT INTO songs (song_id, title, artist_id, year, duration)
    WITH songs_ranked AS (
        SELECT
            song_id,
            title,
            artist_id,
            NULLIF(year, 0) AS year,
            duration,
            ROW_NUMBER() OVER (PARTITION BY song_id ORDER BY artist_id, song_id DESC) AS song_id_ranked
        FROM
            staging_songs
        WHERE
            song_id IS NOT NULL
            AND artist_id IS NOT NULL
            AND song_id NOT IN (SELECT song_id FROM songs)
    )
    SELECT
        song_id,
        title,
        artist_id,
        year,
        duration
    FROM
        songs_ranked
    WHERE
        songs_ranked.song_id_ranked = 1;
"#;

const ARTIST_INSERT: &str = r#"
INSERT INTO artists (artist_id, name, location, latitude, longitude)
    WITH artists_ranked AS (
        SELECT
            artist_id,
            artist_name,
            artist_location,
            artist_latitude,
            artist_longitude,
            ROW_NUMBER() OVER (PARTITION BY artist_id ORDER BY artist_id, artist_name DESC) AS artist_id_ranked
        FROM
            staging_songs
        WHERE
            artist_id IS NOT NULL
            AND
            artist_name IS NOT NULL
            AND
            artist_id NOT IN (SELECT artist_id FROM artists)
    )
    SELECT
        artist_id,
        artist_name,
        artist_location,
        artist_latitude,
        artist_longitude
    FROM
        artists_ranked
    WHERE
        artists_ranked.artist_id_ranked = 1;
"#;

const TIME_INSERT: &str = r#"
INSERT INTO time (start_time, hour, day, week, month, year, weekday)
    WITH timestamp_fixed AS (
        SELECT
          DISTINCT TIMESTAMP 'epoch' + ts / 1000 * INTERVAL '1 second' AS ts
        FROM
          staging_events
        WHERE
          page = 'NextSong'
    ) SELECT
        ts AS start_time,
        EXTRACT(hour FROM ts) AS hour,
        EXTRACT(day FROM ts) AS day,
        EXTRACT(week FROM ts) AS week,
        EXTRACT(month FROM ts) AS month,
        EXTRACT(year FROM ts) AS year,
        EXTRACT(dow FROM ts) AS weekday
    FROM
        timestamp_fixed
    WHERE
        ts NOT IN (SELECT start_time FROM time);
"#;

const USER_UPDATE: &str = r#"
UPDATE users
SET
    first_name = users_ranked.firstname,
    last_name = users_ranked.lastname,
    gender = users_ranked.gender,
    level = users_ranked.level
FROM (
       SELECT
              userid,
              firstname,
              lastname,
              gender,
              level,
              ROW_NUMBER() OVER (PARTITION BY userid ORDER BY userid, ts DESC) AS userid_ranked
       FROM
              staging_events
       WHERE
              page = 'NextSong'
                AND
              userid IN (SELECT user_id FROM users)
) users_ranked
WHERE
    users.user_id = users_ranked.userid
      AND
    users_ranked.userid_ranked = 1;
"#;

const SONG_UPDATE: &str = r#"
UPDATE songs
SET
    title = songs_ranked.title,
    artist_id = songs_ranked.artist_id,
    year = songs_ranked.year,
    duration = songs_ranked.duration
FROM (
    SELECT
        song_id,
        title,
        artist_id,
        NULLIF(year, 0) AS year,
        duration,
        ROW_NUMBER() OVER (PARTITION BY song_id ORDER BY artist_id, song_id DESC) AS song_id_ranked
    FROM
        staging_songs
    WHERE
        song_id IS NOT NULL
        AND artist_id IS NOT NULL
        AND song_id IN (SELECT song_id FROM songs)
) songs_ranked
WHERE
    songs.song_id = songs_ranked.song_id
      AND
    songs_ranked.song_id_ranked = 1;
"#;

const ARTIST_UPDATE: &str = r#"
UPDATE artists
SET
    name = artists_ranked.artist_name,
    location = artists_ranked.artist_location,
    latitude = artists_ranked.artist_latitude,
    longitude = artists_ranked.artist_longitude
FROM (
    SELECT
        artist_id,
        artist_name,
        artist_location,
        artist_latitude,
        artist_longitude,
        ROW_NUMBER() OVER (PARTITION BY artist_id ORDER BY artist_id, artist_name DESC) AS artist_id_ranked
    FROM
        staging_songs
    WHERE
        artist_id IS NOT NULL
        AND
        artist_name IS NOT NULL
        AND
        artist_id IN (SELECT artist_id FROM artists)
) artists_ranked
WHERE
    artists.artist_id = artists_ranked.artist_id
      AND
    artists_ranked.artist_id_ranked = 1;
"#;

const SONGPLAY_INSERT: &str = r#"
INSERT INTO songplays (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
    WITH songs_artist AS (
      SELECT
        s.song_id,
        s.artist_id,
        s.duration,
        s.title,
        a.name
    FROM
        songs s JOIN artists a ON s.artist_id = a.artist_id
    ) SELECT
        TIMESTAMP 'epoch' + ts / 1000 * INTERVAL '1 second' AS start_time,
        userid,
        level,
        song_id,
        artist_id,
        sessionid,
        location,
        useragent
    FROM
        staging_events se
          JOIN songs_artist sa
            ON se.artist = sa.name
                 AND se.song = sa.title
                 AND se.length = sa.duration
    WHERE
        page = 'NextSong';
"#;
