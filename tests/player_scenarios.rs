use std::io::{self, Write};
use tempfile::NamedTempFile;
use video_player::library::{default_catalog, load_catalog};
use video_player::model::{Catalog, Video};
use video_player::player::{RandomPolicy, DEFAULT_FLAG_REASON};
use video_player::{Command, Controller, PlayerError};

/// Two-video catalog, declared in reverse title order
fn create_test_catalog() -> Catalog {
    Catalog::new(vec![
        Video::new(
            "id2",
            "Funny Dogs",
            vec!["#dog".to_string(), "#animal".to_string()],
        ),
        Video::new(
            "id1",
            "Amazing Cat Video",
            vec!["#cat".to_string(), "#animal".to_string()],
        ),
    ])
}

fn create_player() -> Controller<Vec<u8>> {
    Controller::new(create_test_catalog(), Vec::<u8>::new()).with_random_policy(RandomPolicy::First)
}

fn no_input() -> std::iter::Empty<io::Result<String>> {
    std::iter::empty()
}

/// IDs listed by a search, in listed order
fn listed_ids(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .filter_map(|line| {
            let start = line.rfind('(')?;
            let end = line.rfind(')')?;
            Some(line[start + 1..end].to_string())
        })
        .collect()
}

#[test]
fn test_play_then_show_playing_for_every_video() {
    let mut player = create_player();
    let ids: Vec<String> = player.catalog().all().iter().map(|v| v.id.clone()).collect();

    for id in ids {
        player.play(&id).unwrap();
        player.take_output();
        player.show_playing().unwrap();

        let output = player.take_output();
        assert!(output.contains(&format!("({})", id)));
        assert!(!output.contains("PAUSED"));
    }
}

#[test]
fn test_pause_is_idempotent_and_resume_restores() {
    let mut player = create_player();
    player.play("id1").unwrap();
    player.pause().unwrap();
    player.take_output();
    player.pause().unwrap();
    assert_eq!(player.take_output(), "Video already paused: Amazing Cat Video\n");
    assert!(player.is_paused());

    player.resume().unwrap();
    assert!(!player.is_paused());
    assert_eq!(player.current_video().unwrap().id, "id1");
}

#[test]
fn test_flagging_current_video_stops_it() {
    let mut player = create_player();
    player.play("id2").unwrap();
    player.flag_video("id2", "spam").unwrap();
    player.take_output();

    player.show_playing().unwrap();
    assert_eq!(player.take_output(), "No video is currently playing\n");
}

#[test]
fn test_flag_blocks_play_until_allowed() {
    for reason in ["", "spam", "Not supplied"] {
        let mut player = create_player();
        player.flag_video("id1", reason).unwrap();
        assert!(matches!(
            player.play("id1"),
            Err(PlayerError::Flagged { .. })
        ));

        player.allow_video("id1").unwrap();
        player.play("id1").unwrap();
        assert_eq!(player.current_video().unwrap().id, "id1");
    }
}

#[test]
fn test_playlist_names_are_case_insensitive() {
    let mut player = create_player();
    player.create_playlist("Foo").unwrap();
    assert_eq!(player.create_playlist("foo"), Err(PlayerError::DuplicateName));
}

#[test]
fn test_add_remove_round_trip() {
    let mut player = create_player();
    player.create_playlist("mix").unwrap();
    player.add_to_playlist("mix", "id2").unwrap();
    let before: Vec<String> = player
        .playlist("mix")
        .unwrap()
        .video_ids()
        .map(String::from)
        .collect();

    player.add_to_playlist("mix", "id1").unwrap();
    player.remove_from_playlist("mix", "id1").unwrap();

    let after: Vec<String> = player
        .playlist("mix")
        .unwrap()
        .video_ids()
        .map(String::from)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_clear_keeps_playlist_delete_removes_it() {
    let mut player = create_player();
    player.create_playlist("mix").unwrap();
    player.add_to_playlist("mix", "id1").unwrap();

    player.clear_playlist("mix").unwrap();
    assert!(player.show_playlist("mix").is_ok());
    assert!(player.playlist("mix").unwrap().is_empty());

    player.delete_playlist("mix").unwrap();
    assert_eq!(
        player.show_playlist("mix"),
        Err(PlayerError::PlaylistNotFound)
    );
}

#[test]
fn test_two_video_scenario() {
    let mut player = create_player();

    player.show_all_videos().unwrap();
    let output = player.take_output();
    let id1 = output.find("(id1)").unwrap();
    let id2 = output.find("(id2)").unwrap();
    assert!(id1 < id2, "title order: {}", output);

    player.search_videos("dog", &mut no_input()).unwrap();
    assert_eq!(listed_ids(&player.take_output()), vec!["id2"]);

    player
        .search_videos_with_tag("#animal", &mut no_input())
        .unwrap();
    assert_eq!(listed_ids(&player.take_output()), vec!["id1", "id2"]);
}

#[test]
fn test_default_flag_reason_scenario() {
    let mut player = create_player();
    player.flag_video("id1", "").unwrap();
    assert_eq!(player.flag_reason("id1"), Some(DEFAULT_FLAG_REASON));

    player.take_output();
    player.show_all_videos().unwrap();
    assert!(player
        .take_output()
        .contains("Amazing Cat Video (id1) [#cat #animal] - FLAGGED (reason: Not supplied)\n"));

    player.allow_video("id1").unwrap();
    player.take_output();
    player.show_all_videos().unwrap();
    assert!(!player.take_output().contains("FLAGGED"));
}

#[test]
fn test_scripted_session_from_catalog_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Funny Dogs | id2 | #dog , #animal").unwrap();
    writeln!(file, "Amazing Cat Video | id1 | #cat , #animal").unwrap();
    file.flush().unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    let mut player =
        Controller::new(catalog, Vec::<u8>::new()).with_random_policy(RandomPolicy::First);
    let mut input = vec![Ok::<_, io::Error>("2".to_string())].into_iter();

    let script = "\
        NUMBER_OF_VIDEOS\n\
        CREATE_PLAYLIST Favs\n\
        ADD_TO_PLAYLIST favs id1\n\
        SEARCH_VIDEOS o\n\
        FLAG_VIDEO id2 too loud\n\
        PLAY_RANDOM\n\
        SHOW_PLAYLIST FAVS\n";

    for line in script.lines() {
        if let Some(command) = Command::parse(line).unwrap() {
            let _ = command.run(&mut player, &mut input);
        }
    }

    assert_eq!(
        player.take_output(),
        "2 videos in the library\n\
         Successfully created new playlist: Favs\n\
         Added video to favs: Amazing Cat Video\n\
         Here are the results for o:\n\
         \x20 1) Amazing Cat Video (id1) [#cat #animal]\n\
         \x20 2) Funny Dogs (id2) [#dog #animal]\n\
         Would you like to play any of the above? If yes, specify the number of the video.\n\
         If your answer is not a valid number, we will assume it's a no.\n\
         Playing video: Funny Dogs\n\
         Stopping video: Funny Dogs\n\
         Successfully flagged video: Funny Dogs (reason: too loud)\n\
         Playing video: Amazing Cat Video\n\
         Showing playlist: FAVS\n\
         \x20 Amazing Cat Video (id1) [#cat #animal]\n"
    );
}

#[test]
fn test_default_catalog_session() {
    let mut player = Controller::new(default_catalog(), Vec::<u8>::new());
    player.number_of_videos().unwrap();
    assert_eq!(player.take_output(), "5 videos in the library\n");
}
