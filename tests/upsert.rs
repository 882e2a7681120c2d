//! Upsert behaviour of the mapper against both stores

use songbook::{MapperError, MemoryStore, Song, SongId, SongMapper, SongStore, SqliteStore};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

async fn sqlite_mapper() -> SongMapper<SqliteStore> {
    init_tracing();
    SongMapper::new(SqliteStore::in_memory().await.unwrap())
}

async fn run_blueprint_walkthrough<S: SongStore>(mapper: &SongMapper<S>) {
    let mut song = mapper.create("99 Problems", "The Blueprint").await.unwrap();
    assert_eq!(song.id(), Some(SongId(1)));

    song.album = "The Black Album".to_string();
    mapper.save(&mut song).await.unwrap();

    let row = mapper.store().select_by_id(SongId(1)).await.unwrap().unwrap();
    assert_eq!(row.name, "99 Problems");
    assert_eq!(row.album, "The Black Album");
    assert_eq!(mapper.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn blueprint_walkthrough_memory() {
    init_tracing();
    run_blueprint_walkthrough(&SongMapper::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn blueprint_walkthrough_sqlite() {
    run_blueprint_walkthrough(&sqlite_mapper().await).await;
}

#[tokio::test]
async fn repeated_save_keeps_one_row() {
    let mapper = sqlite_mapper().await;
    let mut song = Song::new("Encore", "The Black Album");

    let first = mapper.save(&mut song).await.unwrap();
    let second = mapper.save(&mut song).await.unwrap();
    assert_eq!(first, second);

    let all = mapper.all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], song);
}

#[tokio::test]
async fn duplicate_names_update_only_own_row() {
    let mapper = sqlite_mapper().await;
    let mut live = mapper.create("Intro", "Live Album").await.unwrap();
    let studio = mapper.create("Intro", "Studio Album").await.unwrap();

    live.album = "Live Album (Deluxe)".to_string();
    mapper.save(&mut live).await.unwrap();

    let untouched = mapper.find_by_id(studio.id().unwrap()).await.unwrap().unwrap();
    assert_eq!(untouched.album, "Studio Album");

    let first = mapper.find_by_name("Intro").await.unwrap().unwrap();
    assert_eq!(first.id(), live.id());
    assert_eq!(first.album, "Live Album (Deluxe)");
}

#[tokio::test]
async fn renamed_song_updates_by_identifier() {
    let mapper = sqlite_mapper().await;
    let mut song = mapper.create("Working Title", "Demo").await.unwrap();

    song.name = "Final Title".to_string();
    mapper.save(&mut song).await.unwrap();

    assert!(mapper.find_by_name("Working Title").await.unwrap().is_none());
    let found = mapper.find_by_name("Final Title").await.unwrap().unwrap();
    assert_eq!(found, song);
}

#[tokio::test]
async fn find_by_name_without_match_is_none() {
    let mapper = sqlite_mapper().await;
    assert!(mapper.find_by_name("Nothing Here").await.unwrap().is_none());
}

#[tokio::test]
async fn unsaved_update_writes_nothing() {
    let mapper = sqlite_mapper().await;
    let err = mapper.update(&Song::new("Ghost", "Track")).await.unwrap_err();
    assert!(matches!(err, MapperError::NotPersisted));
    assert!(mapper.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_after_delete_reports_missing_row() {
    let mapper = sqlite_mapper().await;
    let mut song = mapper.create("Short Lived", "Single").await.unwrap();
    let id = song.id().unwrap();
    mapper.delete(song.clone()).await.unwrap();

    song.album = "Reissue".to_string();
    let err = mapper.save(&mut song).await.unwrap_err();
    assert!(matches!(err, MapperError::RowMissing(missing) if missing == id));
    assert!(mapper.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn storage_error_surfaces_from_sqlite() {
    let mapper = sqlite_mapper().await;
    sqlx::query("DROP TABLE songs")
        .execute(mapper.store().pool())
        .await
        .unwrap();

    let err = mapper.create("Song", "Album").await.unwrap_err();
    assert!(matches!(err, MapperError::Storage(_)));
}
