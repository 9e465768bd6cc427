use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tinted_configuration::output::OutputConfiguration;

use crate::console::{
    probe_colour_capability,
    write_fallback_notice,
    CapabilityProbe,
    Colour,
    ColourMode,
    Colouring,
    ColouringBackend,
    Level,
    ReporterError,
};

/// Line terminator used by the leveled methods that don't take one.
pub const DEFAULT_END: &str = "\n";

/// Set once the fallback notice has been printed, so it only ever appears once per process.
static FALLBACK_NOTICE_SHOWN: AtomicBool = AtomicBool::new(false);

/// Settings a [`ConsoleReporter`] is created with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReporterOptions {
    /// Whether `verbose` messages are printed.
    pub verbose: bool,

    pub colour_mode: ColourMode,

    /// Print a short notice if `colour_mode` is `auto` and colour turns out to be unavailable.
    pub show_fallback_notice: bool,
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            colour_mode: ColourMode::Auto,
            show_fallback_notice: true,
        }
    }
}

impl From<&OutputConfiguration> for ReporterOptions {
    fn from(configuration: &OutputConfiguration) -> Self {
        Self {
            verbose: configuration.verbose,
            colour_mode: configuration.colour,
            show_fallback_notice: configuration.show_fallback_notice,
        }
    }
}


/// Prints leveled messages into a sink (standard output by default).
///
/// | Level     | Colour  | Label        | Printed only when verbose |
/// |-----------|---------|--------------|---------------------------|
/// | `info`    | -       | -            | no                        |
/// | `verbose` | cyan    | -            | yes                       |
/// | `ok`      | green   | -            | no                        |
/// | `warn`    | magenta | `Warning: `  | no                        |
/// | `error`   | red     | `Error: `    | no                        |
///
/// Every level has a `*_end` variant that takes the line terminator. An empty terminator
/// leaves the line open (e.g. for progress output) and flushes the sink immediately.
///
/// Each message (text, terminator and flush) is written while holding the sink's lock,
/// so messages from different threads never interleave.
///
/// Creating a reporter never fails. If the colour fallback notice can't be written
/// into the sink, it is dropped; write failures of messages are returned to the caller.
pub struct ConsoleReporter<W: Write = Stdout> {
    sink: Mutex<W>,

    colouring: Colouring,

    verbose: AtomicBool,
}

impl ConsoleReporter<Stdout> {
    /// Create a reporter printing to standard output, probing the terminal for colour support.
    pub fn new(options: ReporterOptions) -> Self {
        Self::with_sink(io::stdout(), options)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter printing into `sink`. Colour support is still probed
    /// on the current process' standard output.
    pub fn with_sink(sink: W, options: ReporterOptions) -> Self {
        let probe = probe_colour_capability(options.colour_mode);
        Self::with_probe(sink, options, probe)
    }

    /// Create a reporter using the result of an already performed colour probe.
    pub fn with_probe(
        sink: W,
        options: ReporterOptions,
        probe: CapabilityProbe,
    ) -> Self {
        Self::with_notice_guard(sink, options, probe, &FALLBACK_NOTICE_SHOWN)
    }

    /// `notice_shown` is set once the fallback notice has been written;
    /// no notice is written if it is already set.
    pub(crate) fn with_notice_guard(
        mut sink: W,
        options: ReporterOptions,
        probe: CapabilityProbe,
        notice_shown: &AtomicBool,
    ) -> Self {
        if options.show_fallback_notice
            && probe.warrants_fallback_notice()
            && !notice_shown.swap(true, Ordering::SeqCst)
        {
            let _ = write_fallback_notice(&mut sink);
        }

        Self {
            sink: Mutex::new(sink),
            colouring: probe.into_colouring(),
            verbose: AtomicBool::new(options.verbose),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    /// Whether this reporter ended up with the colour-capable backend.
    pub fn is_colouring(&self) -> bool {
        self.colouring.is_colouring()
    }

    /// Consume the reporter, returning its sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    pub fn info<D: Display>(&self, text: D) -> Result<(), ReporterError> {
        self.print(Level::Info, text, DEFAULT_END)
    }

    pub fn info_end<D: Display>(
        &self,
        text: D,
        end: &str,
    ) -> Result<(), ReporterError> {
        self.print(Level::Info, text, end)
    }

    /// Prints only if verbose mode is enabled at the time of the call.
    pub fn verbose<D: Display>(&self, text: D) -> Result<(), ReporterError> {
        self.print(Level::Verbose, text, DEFAULT_END)
    }

    pub fn verbose_end<D: Display>(
        &self,
        text: D,
        end: &str,
    ) -> Result<(), ReporterError> {
        self.print(Level::Verbose, text, end)
    }

    pub fn ok<D: Display>(&self, text: D) -> Result<(), ReporterError> {
        self.print(Level::Ok, text, DEFAULT_END)
    }

    pub fn ok_end<D: Display>(
        &self,
        text: D,
        end: &str,
    ) -> Result<(), ReporterError> {
        self.print(Level::Ok, text, end)
    }

    pub fn warn<D: Display>(&self, text: D) -> Result<(), ReporterError> {
        self.print(Level::Warn, text, DEFAULT_END)
    }

    pub fn warn_end<D: Display>(
        &self,
        text: D,
        end: &str,
    ) -> Result<(), ReporterError> {
        self.print(Level::Warn, text, end)
    }

    pub fn error<D: Display>(&self, text: D) -> Result<(), ReporterError> {
        self.print(Level::Error, text, DEFAULT_END)
    }

    pub fn error_end<D: Display>(
        &self,
        text: D,
        end: &str,
    ) -> Result<(), ReporterError> {
        self.print(Level::Error, text, end)
    }

    /// Print `text` at the given level, followed by `end`.
    pub fn print<D: Display>(
        &self,
        level: Level,
        text: D,
        end: &str,
    ) -> Result<(), ReporterError> {
        if level.is_verbose_only() && !self.is_verbose() {
            return Ok(());
        }

        let message = format!("{}{text}", level.label().unwrap_or_default());

        self.print_coloured(&message, level.colour(), end)
    }

    fn print_coloured(
        &self,
        text: &str,
        colour: Option<Colour>,
        end: &str,
    ) -> Result<(), ReporterError> {
        let rendered = match colour {
            Some(colour) => self.colouring.colourize(text, colour),
            None => text.to_string(),
        };

        let mut sink = self.sink.lock();

        sink.write_all(rendered.as_bytes())
            .and_then(|_| sink.write_all(end.as_bytes()))
            .map_err(|error| ReporterError::Write { error })?;

        if end.is_empty() {
            sink.flush()
                .map_err(|error| ReporterError::Flush { error })?;
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::console::UnavailableReason;

    fn quiet_options(verbose: bool) -> ReporterOptions {
        ReporterOptions {
            verbose,
            colour_mode: ColourMode::Never,
            show_fallback_notice: false,
        }
    }

    fn plain_reporter(verbose: bool) -> ConsoleReporter<Vec<u8>> {
        ConsoleReporter::with_probe(
            Vec::new(),
            quiet_options(verbose),
            CapabilityProbe::Disabled,
        )
    }

    fn colour_reporter(verbose: bool) -> ConsoleReporter<Vec<u8>> {
        ConsoleReporter::with_probe(
            Vec::new(),
            quiet_options(verbose),
            CapabilityProbe::Capable,
        )
    }

    /// Output with any colour escape sequences removed.
    fn stripped_output(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(strip_ansi_escapes::strip(reporter.into_inner()))
            .unwrap()
    }

    /// Sink that records how many times it was flushed.
    #[derive(Default)]
    struct FlushCounter {
        written: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn each_level_prints_exactly_one_line() {
        for level in Level::ALL {
            let reporter = colour_reporter(true);
            reporter.print(level, "message", DEFAULT_END).unwrap();

            let output = stripped_output(reporter);

            assert_eq!(output.lines().count(), 1, "level {level}");
            assert!(output.ends_with('\n'), "level {level}");
        }
    }

    #[test]
    fn verbose_is_silent_unless_enabled() {
        let reporter = plain_reporter(false);
        reporter.verbose("x").unwrap();
        assert_eq!(stripped_output(reporter), "");

        let reporter = plain_reporter(true);
        reporter.verbose("x").unwrap();
        assert_eq!(stripped_output(reporter), "x\n");
    }

    #[test]
    fn verbose_follows_toggle_at_call_time() {
        let reporter = colour_reporter(false);

        reporter.verbose("hidden").unwrap();
        reporter.set_verbose(true);
        reporter.verbose("shown").unwrap();
        reporter.set_verbose(false);
        reporter.verbose("hidden again").unwrap();

        assert_eq!(stripped_output(reporter), "shown\n");
    }

    #[test]
    fn warn_is_labelled() {
        let reporter = colour_reporter(false);
        reporter.warn("disk full").unwrap();

        assert_eq!(stripped_output(reporter), "Warning: disk full\n");
    }

    #[test]
    fn error_converts_non_string_input() {
        let reporter = colour_reporter(false);
        reporter.error(404).unwrap();

        assert_eq!(stripped_output(reporter), "Error: 404\n");
    }

    #[test]
    fn info_and_ok_print_text_unchanged() {
        let reporter = colour_reporter(false);
        reporter.info("hello").unwrap();
        reporter.ok(3.5).unwrap();

        assert_eq!(stripped_output(reporter), "hello\n3.5\n");
    }

    #[test]
    fn info_is_never_coloured() {
        let reporter = colour_reporter(false);
        reporter.info("plain").unwrap();

        assert_eq!(reporter.into_inner(), b"plain\n".to_vec());
    }

    #[test]
    fn plain_fallback_matches_coloured_content() {
        let plain = plain_reporter(true);
        let coloured = colour_reporter(true);

        for reporter in [&plain, &coloured] {
            reporter.info("a").unwrap();
            reporter.verbose("b").unwrap();
            reporter.ok("c").unwrap();
            reporter.warn("d").unwrap();
            reporter.error("e").unwrap();
        }

        assert!(!plain.is_colouring());
        assert!(coloured.is_colouring());

        let plain_output = String::from_utf8(plain.into_inner()).unwrap();
        assert_eq!(plain_output, "a\nb\nc\nWarning: d\nError: e\n");
        assert_eq!(stripped_output(coloured), plain_output);
    }

    #[test]
    fn custom_end_replaces_newline() {
        let reporter = plain_reporter(false);
        reporter.ok_end("step 1", " ... ").unwrap();
        reporter.ok_end("done", "\r\n").unwrap();

        assert_eq!(reporter.into_inner(), b"step 1 ... done\r\n".to_vec());
    }

    #[test]
    fn empty_end_flushes_for_every_level() {
        for level in Level::ALL {
            let reporter = ConsoleReporter::with_probe(
                FlushCounter::default(),
                quiet_options(true),
                CapabilityProbe::Disabled,
            );

            reporter.print(level, "progress", "").unwrap();

            let sink = reporter.into_inner();
            let expected =
                format!("{}progress", level.label().unwrap_or_default());

            assert_eq!(sink.flushes, 1, "level {level}");
            assert_eq!(sink.written, expected.into_bytes(), "level {level}");
        }
    }

    #[test]
    fn newline_end_does_not_flush() {
        let reporter = ConsoleReporter::with_probe(
            FlushCounter::default(),
            quiet_options(false),
            CapabilityProbe::Disabled,
        );

        reporter.info("line").unwrap();
        reporter.error("line").unwrap();

        assert_eq!(reporter.into_inner().flushes, 0);
    }

    #[test]
    fn gated_verbose_does_not_flush() {
        let reporter = ConsoleReporter::with_probe(
            FlushCounter::default(),
            quiet_options(false),
            CapabilityProbe::Disabled,
        );

        reporter.verbose_end("x", "").unwrap();

        let sink = reporter.into_inner();
        assert_eq!(sink.flushes, 0);
        assert!(sink.written.is_empty());
    }

    #[test]
    fn sink_failures_are_reported() {
        let reporter = ConsoleReporter::with_probe(
            BrokenSink,
            quiet_options(false),
            CapabilityProbe::Disabled,
        );

        assert!(matches!(
            reporter.warn("x"),
            Err(ReporterError::Write { .. })
        ));
    }

    #[test]
    fn options_follow_output_configuration() {
        let configuration = OutputConfiguration {
            verbose: true,
            colour: ColourMode::Always,
            show_fallback_notice: false,
        };

        assert_eq!(
            ReporterOptions::from(&configuration),
            ReporterOptions {
                verbose: true,
                colour_mode: ColourMode::Always,
                show_fallback_notice: false,
            }
        );
    }

    #[test]
    fn forced_modes_select_backend() {
        let always = ConsoleReporter::with_sink(
            Vec::new(),
            ReporterOptions {
                colour_mode: ColourMode::Always,
                ..quiet_options(false)
            },
        );
        let never = ConsoleReporter::with_sink(Vec::new(), quiet_options(false));

        assert!(always.is_colouring());
        assert!(!never.is_colouring());
    }

    fn notice_options() -> ReporterOptions {
        ReporterOptions {
            show_fallback_notice: true,
            ..quiet_options(false)
        }
    }

    const MONOCHROME: CapabilityProbe =
        CapabilityProbe::Unavailable(UnavailableReason::TooFewColours(2));

    #[test]
    fn fallback_notice_is_written_into_sink() {
        let notice_shown = AtomicBool::new(false);
        let reporter = ConsoleReporter::with_notice_guard(
            Vec::new(),
            notice_options(),
            MONOCHROME,
            &notice_shown,
        );
        reporter.ok("hello").unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Unable to enable coloured output"));
        assert!(lines[1].starts_with("Try: "));
        assert_eq!(lines[2], "hello");
        assert!(notice_shown.load(Ordering::SeqCst));
    }

    #[test]
    fn fallback_notice_can_be_turned_off() {
        let notice_shown = AtomicBool::new(false);
        let reporter = ConsoleReporter::with_notice_guard(
            Vec::new(),
            quiet_options(false),
            MONOCHROME,
            &notice_shown,
        );
        reporter.ok("hello").unwrap();

        assert_eq!(reporter.into_inner(), b"hello\n".to_vec());
        assert!(!notice_shown.load(Ordering::SeqCst));
    }

    #[test]
    fn fallback_notice_is_written_only_once() {
        let notice_shown = AtomicBool::new(false);

        let first = ConsoleReporter::with_notice_guard(
            Vec::new(),
            notice_options(),
            MONOCHROME,
            &notice_shown,
        );
        let second = ConsoleReporter::with_notice_guard(
            Vec::new(),
            notice_options(),
            MONOCHROME,
            &notice_shown,
        );

        assert_eq!(first.into_inner().iter().filter(|&&b| b == b'\n').count(), 2);
        assert!(second.into_inner().is_empty());
    }

    #[test]
    fn piped_output_gets_no_notice() {
        let notice_shown = AtomicBool::new(false);
        let reporter = ConsoleReporter::with_notice_guard(
            Vec::new(),
            notice_options(),
            CapabilityProbe::Unavailable(UnavailableReason::NotATerminal),
            &notice_shown,
        );
        reporter.warn("disk full").unwrap();

        assert_eq!(reporter.into_inner(), b"Warning: disk full\n".to_vec());
    }

    #[test]
    fn unwritable_notice_does_not_prevent_creation() {
        let notice_shown = AtomicBool::new(false);
        let reporter = ConsoleReporter::with_notice_guard(
            BrokenSink,
            notice_options(),
            MONOCHROME,
            &notice_shown,
        );

        assert!(!reporter.is_colouring());
        assert!(notice_shown.load(Ordering::SeqCst));
    }
}
