// Session wrapper tests driven through the public API
use std::io::Write;
use std::sync::{Arc, Mutex};

use vtgrid::{Color, Session, SessionClient, SessionError, SessionSnapshot};

#[derive(Clone, Default)]
struct VecWriter(Arc<Mutex<Vec<u8>>>);

impl VecWriter {
    fn contents(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }
}

impl Write for VecWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

struct NullClient;

impl SessionClient for NullClient {}

#[derive(Clone, Default)]
struct TitleClient(Arc<Mutex<Vec<String>>>);

impl SessionClient for TitleClient {
    fn on_title_changed(&mut self, title: &str) {
        self.0.lock().unwrap().push(title.to_string());
    }
}

fn new_session(rows: usize) -> (Session, VecWriter) {
    let writer = VecWriter::default();
    let session = Session::new(80, rows, 100, Box::new(writer.clone()), Box::new(NullClient));
    (session, writer)
}

#[test]
fn test_default_client_needs_no_overrides() {
    let (session, _writer) = new_session(24);
    session.feed(b"\x07\x1b]2;quiet\x07text").unwrap();
    assert_eq!(session.title(), "quiet");
}

#[test]
fn test_render_pass_under_shared_lock() {
    let (session, _writer) = new_session(24);
    session.feed(b"\x1b[32mgreen\x1b[0m line\r\nsecond").unwrap();

    let terminal = session.terminal();
    let term = terminal.lock();
    assert_eq!(term.screen().row_text(0).trim_end(), "green line");
    assert_eq!(term.screen().row_text(1).trim_end(), "second");
    assert_eq!(term.screen().style_at(0, 0).foreground(), Color::Indexed(2));
    assert_eq!(term.cursor_row(), 1);
    assert_eq!(term.cursor_column(), 6);
}

#[test]
fn test_interactive_exchange() {
    let writer = VecWriter::default();
    let titles = TitleClient::default();
    let session = Session::new(
        80,
        24,
        100,
        Box::new(writer.clone()),
        Box::new(titles.clone()),
    );

    session.feed(b"$ ").unwrap();
    session.write_text("make\r").unwrap();
    session
        .feed(b"make\r\n\x1b]2;make: all\x07building...\r\ndone\r\n$ ")
        .unwrap();

    assert_eq!(writer.contents(), b"make\r");
    assert_eq!(session.title(), "make: all");
    assert_eq!(titles.0.lock().unwrap().as_slice(), ["make: all"]);
    let transcript = session.transcript_text();
    assert!(transcript.contains("building..."));
    assert!(transcript.ends_with("$"));
}

#[test]
fn test_scrollback_flows_into_transcript() {
    let (session, _writer) = new_session(5);
    for i in 1..=30 {
        session.feed(format!("line{}\r\n", i).as_bytes()).unwrap();
    }
    let transcript = session.transcript_text();
    assert!(transcript.starts_with("line1\n"));
    assert!(transcript.ends_with("line30"));
    assert_eq!(transcript.lines().count(), 30);
}

#[test]
fn test_reader_thread_feeds_while_main_thread_reads() {
    let (session, writer) = new_session(24);
    let session = Arc::new(session);

    let feeder = Arc::clone(&session);
    let handle = std::thread::spawn(move || {
        for chunk in [&b"chunk one "[..], &b"\x1b[6n"[..], &b"chunk two"[..]] {
            feeder.feed(chunk).unwrap();
        }
    });
    handle.join().unwrap();

    let terminal = session.terminal();
    assert_eq!(
        terminal.lock().screen().row_text(0).trim_end(),
        "chunk one chunk two"
    );
    assert_eq!(writer.contents(), b"\x1b[1;11R");
}

#[test]
fn test_snapshot_serializes() {
    let (session, _writer) = new_session(24);
    session.feed(b"\x1b]2;snap\x07hello").unwrap();

    let value = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(value["columns"], 80);
    assert_eq!(value["title"], "snap");

    let back: SessionSnapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back.cursor_column, 5);
    assert!(back.screen_text.starts_with("hello"));
}

#[test]
fn test_stopped_session_rejects_input() {
    let (session, _writer) = new_session(24);
    session.stop();
    assert!(matches!(
        session.write_text("ls\r"),
        Err(SessionError::NotRunning)
    ));
    assert!(matches!(session.paste("x"), Err(SessionError::NotRunning)));
    // Output processing without replies still works.
    session.feed(b"orphaned output").unwrap();
    assert_eq!(session.snapshot().screen_text, "orphaned output");
}
