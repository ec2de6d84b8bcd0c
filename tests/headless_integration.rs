use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{rngs::StdRng, SeedableRng};

use wordrun::app::App;
use wordrun::countdown::Countdown;
use wordrun::language::Vocabulary;
use wordrun::runtime::{AppEvent, FixedTicker, Runner, TestEventSource};
use wordrun::session::{Phase, TypingSession};
use wordrun::word_set::WordMode;

// Headless integration using the internal runtime + App without a TTY

fn app_with(mode: WordMode, countdown: Countdown) -> App {
    App::new(TypingSession::with_rng(
        Vocabulary::builtin().unwrap(),
        mode,
        countdown,
        StdRng::seed_from_u64(99),
    ))
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn send_word(tx: &mpsc::Sender<AppEvent>, word: &str) {
    for c in word.chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }
    tx.send(key(KeyCode::Char(' '))).unwrap();
}

/// Drives the app like the binary does, for at most `steps` runner steps.
fn drive<F: Fn(&App) -> bool>(
    app: &mut App,
    runner: &Runner<TestEventSource, FixedTicker>,
    steps: u32,
    done: F,
) {
    for _ in 0..steps {
        let event = runner.step(app.wakeup(Instant::now()));
        app.handle_event(event, Instant::now());
        if done(app) {
            break;
        }
    }
}

#[test]
fn headless_typing_flow_scores_words() {
    let mut app = app_with(WordMode::Ten, Countdown::new(30));
    let words: Vec<String> = app.session.words().iter().map(str::to_string).collect();

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    tx.send(key(KeyCode::Enter)).unwrap();
    send_word(&tx, &words[0]);
    let mut wrong = words[1].clone();
    wrong.pop();
    wrong.push('x');
    if wrong == words[1] {
        wrong.push('x');
    }
    send_word(&tx, &wrong);

    drive(&mut app, &runner, 100, |app| app.session.active_word_index() == 2);

    assert_eq!(app.session.phase(), Phase::Running);
    assert_eq!(app.session.active_word_index(), 2);
    assert_eq!(app.session.correct_count(), 1);
    assert_eq!(app.session.current_input(), "");
}

#[test]
fn headless_all_words_finish_early() {
    let mut app = app_with(WordMode::Ten, Countdown::new(30));
    let words: Vec<String> = app.session.words().iter().map(str::to_string).collect();

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    tx.send(key(KeyCode::Enter)).unwrap();
    for w in &words {
        send_word(&tx, w);
    }

    drive(&mut app, &runner, 500, |app| app.session.phase() == Phase::Finished);

    assert_eq!(app.session.phase(), Phase::Finished);
    let summary = app.session.summary();
    assert_eq!((summary.correct, summary.total), (10, 10));
    assert!(app.wakeup(Instant::now()).is_none());
}

#[test]
fn headless_timed_session_finishes_by_time() {
    // 3 "seconds" of 20ms each
    let mut app = app_with(
        WordMode::Ten,
        Countdown::with_period(3, Duration::from_millis(20)),
    );

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(10)),
    );
    tx.send(key(KeyCode::Enter)).unwrap();

    drive(&mut app, &runner, 200, |app| app.session.phase() == Phase::Finished);

    assert_eq!(app.session.phase(), Phase::Finished);
    assert_eq!(app.session.time_remaining(), 0);
    let summary = app.session.summary();
    assert_eq!((summary.correct, summary.total), (0, 10));
}

#[test]
fn headless_restart_stops_the_clock() {
    let mut app = app_with(
        WordMode::TwentyFive,
        Countdown::with_period(30, Duration::from_millis(10)),
    );

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );
    tx.send(key(KeyCode::Enter)).unwrap();

    drive(&mut app, &runner, 200, |app| app.session.time_remaining() < 28);
    assert_eq!(app.session.phase(), Phase::Running);

    let before = app.session.words().clone();
    tx.send(AppEvent::Key(KeyEvent::new(
        KeyCode::Char('r'),
        KeyModifiers::CONTROL,
    )))
    .unwrap();
    drive(&mut app, &runner, 50, |app| app.session.phase() == Phase::Idle);

    assert_eq!(app.session.phase(), Phase::Idle);
    assert_eq!(app.session.time_remaining(), 30);
    assert_eq!(app.session.words().len(), 25);
    assert_ne!(app.session.words(), &before);

    // wait well past several periods: nothing may tick any more
    std::thread::sleep(Duration::from_millis(60));
    drive(&mut app, &runner, 5, |_| false);
    assert_eq!(app.session.time_remaining(), 30);
    assert_eq!(app.session.phase(), Phase::Idle);
}

#[test]
fn headless_mode_change_from_finished() {
    let mut app = app_with(WordMode::Ten, Countdown::with_period(1, Duration::from_millis(5)));

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );
    tx.send(key(KeyCode::Enter)).unwrap();
    drive(&mut app, &runner, 100, |app| app.session.phase() == Phase::Finished);
    assert_eq!(app.session.phase(), Phase::Finished);

    tx.send(key(KeyCode::Tab)).unwrap();
    drive(&mut app, &runner, 10, |app| app.session.phase() == Phase::Idle);

    assert_eq!(app.session.mode(), WordMode::TwentyFive);
    assert_eq!(app.session.words().len(), 25);
    assert_eq!(app.session.time_remaining(), 1);
    assert_eq!(app.session.correct_count(), 0);
}

#[test]
fn headless_escape_quits() {
    let mut app = app_with(WordMode::Ten, Countdown::new(30));
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );
    tx.send(key(KeyCode::Esc)).unwrap();

    drive(&mut app, &runner, 10, App::should_quit);
    assert!(app.should_quit());
}

#[test]
fn headless_closed_input_ends_the_loop() {
    let mut app = app_with(WordMode::Ten, Countdown::new(30));
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );
    tx.send(key(KeyCode::Enter)).unwrap();
    drop(tx);

    drive(&mut app, &runner, 500, App::should_quit);
    assert!(app.should_quit());
    assert!(app.input_closed());
    assert_eq!(app.session.phase(), Phase::Running);
}
