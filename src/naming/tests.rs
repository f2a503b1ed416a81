use super::filename::synthesize;
use super::*;
use crate::config::NamingSettings;

fn builder() -> FolderNameBuilder {
    FolderNameBuilder::new(&NamingSettings::default()).unwrap()
}

#[test]
fn builds_embedded_artist_folder_name() {
    let b = builder();
    assert_eq!(
        b.build("Game OST [Studio]", "FLAC", Some("2015")),
        "Game [Studio] (FLAC) [2015]"
    );
    assert_eq!(
        b.build("Project Chaos [NiGHTS]", "FLAC", Some("2011")),
        "Project Chaos [NiGHTS] (FLAC) [2011]"
    );
}

#[test]
fn builds_plain_folder_name_and_omits_missing_year() {
    let b = builder();
    assert_eq!(b.build("Interstellar", "MP3", Some("2014")), "Interstellar (MP3) [2014]");
    assert_eq!(b.build("Interstellar", "MP3", None), "Interstellar (MP3)");
    assert_eq!(b.build("Interstellar", "MP3", Some("  ")), "Interstellar (MP3)");
}

#[test]
fn removes_soundtrack_noise_case_insensitively() {
    let b = builder();
    assert_eq!(
        b.build("Dune (Original Motion Picture Soundtrack)", "FLAC", Some("2021")),
        "Dune (FLAC) [2021]"
    );
    assert_eq!(b.build("Halo original soundtrack", "OGG", None), "Halo (OGG)");
    assert_eq!(b.build("Final ost Edition", "OGG", None), "Final Edition (OGG)");
    // Whole words only.
    assert_eq!(b.build("Ghost Stories", "MP3", None), "Ghost Stories (MP3)");
}

#[test]
fn replaces_existing_suffix_instead_of_stacking() {
    let b = builder();
    assert_eq!(
        b.build("Game [Studio] (MP3) [2011]", "FLAC", Some("2015")),
        "Game [Studio] (FLAC) [2015]"
    );
    assert_eq!(b.build("Game (FLAC)", "FLAC", Some("2015")), "Game (FLAC) [2015]");
}

#[test]
fn sanitizes_illegal_characters() {
    let b = builder();
    assert_eq!(
        b.build("AC/DC: Live? <Remaster>", "FLAC", Some("1992")),
        "AC-DC Live Remaster (FLAC) [1992]"
    );
    assert_eq!(b.build(".hack//SIGN", "FLAC", None), "hack--SIGN (FLAC)");
}

#[test]
fn empty_album_falls_back_to_unknown() {
    let b = builder();
    assert_eq!(b.build("OST", "WAV", None), "Unknown Album (WAV)");
    assert_eq!(b.build("", "WAV", Some("1999")), "Unknown Album (WAV) [1999]");
}

#[test]
fn custom_noise_terms_are_escaped() {
    let settings = NamingSettings {
        noise_terms: vec!["(Score)".into(), "".into()],
        ..NamingSettings::default()
    };
    let b = FolderNameBuilder::new(&settings).unwrap();
    assert_eq!(b.build("Jaws (Score)", "MP3", None), "Jaws (MP3)");
    // Defaults are replaced, not extended.
    assert_eq!(b.build("Jaws OST", "MP3", None), "Jaws OST (MP3)");
}

#[test]
fn folder_builder_is_idempotent() {
    let b = builder();
    let names = [
        "Game OST [Studio]",
        "Project Chaos [NiGHTS]",
        "Interstellar",
        " - Halo 3 (Original Soundtrack) - ",
        "Dune (Original Motion Picture Soundtrack)",
        "AC/DC: Live?",
        ".hack//SIGN",
        "[Studio]",
        "[Studio] Game",
        "Album (Deluxe Edition)",
        "Live (Remastered) [1999]",
        "Game [Studio] (MP3) [2011]",
        "{Braces} and -dashes-",
        "Tabs\tand  spaces",
        "OS:T",
        "",
    ];
    for name in names {
        for (format, year) in [("FLAC", Some("2015")), ("MP3", None), ("OGG", Some("1999"))] {
            let once = b.build(name, format, year);
            let twice = b.build(&once, format, year);
            assert_eq!(once, twice, "not idempotent for {name:?} ({format}, {year:?})");
        }
    }
}

#[test]
fn parses_primary_and_fallback_filename_patterns() {
    let p = parse_filename("1-01-Intro.flac");
    assert_eq!(
        (p.disc.as_str(), p.track.as_str(), p.title.as_str(), p.ext.as_str()),
        ("1", "01", "Intro", ".flac")
    );
    assert_eq!(p.pattern, Some("disc-track-title"));

    let p = parse_filename("1-02 - Main Theme.flac");
    assert_eq!((p.disc.as_str(), p.track.as_str(), p.title.as_str()), ("1", "02", "Main Theme"));

    let p = parse_filename("2 - 07.Boss Battle.mp3");
    assert_eq!((p.disc.as_str(), p.track.as_str(), p.title.as_str()), ("2", "07", "Boss Battle"));
    assert_eq!(p.pattern, Some("disc-track.title"));

    let p = parse_filename("1 - 03. Credits.ogg");
    assert_eq!(p.title, "Credits");
    assert_eq!(p.canonical(), "1 - 03. Credits.ogg");
}

#[test]
fn unmatched_filenames_use_defaults() {
    let p = parse_filename("Main Theme.mp3");
    assert_eq!(p.disc, "0");
    assert_eq!(p.track, "00");
    assert_eq!(p.title, "Main Theme");
    assert_eq!(p.pattern, None);
    assert_eq!(p.canonical(), "0 - 00. Main Theme.mp3");

    let p = parse_filename("03 Track");
    assert_eq!(p.ext, "");
    assert_eq!(p.canonical(), "0 - 00. 03 Track");
}

#[test]
fn title_leading_separators_are_trimmed() {
    let p = parse_filename("1 - 04 - - .Hidden Track.wav");
    assert_eq!(p.title, "Hidden Track");
}

#[test]
fn synthesize_then_parse_round_trips() {
    let cases = [
        ("1", "01", "Intro", ".flac"),
        ("2", "13", "Main Theme - Reprise", ".mp3"),
        ("10", "100", "5 Stars", ".ogg"),
        ("1", "02", "Ending (Extended)", ".wav"),
        ("3", "9", "Title.With.Dots", ".flac"),
    ];
    for (disc, track, title, ext) in cases {
        let name = synthesize(disc, track, title, ext);
        let p = parse_filename(&name);
        assert_eq!(
            (p.disc.as_str(), p.track.as_str(), p.title.as_str(), p.ext.as_str()),
            (disc, track, title, ext),
            "round trip failed for {name:?}"
        );
    }
}
