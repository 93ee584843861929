use kernel_console::Console;
use kernel_uart::ByteSink;
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Default)]
struct Recorder(Vec<u8>);

impl ByteSink for Recorder {
    fn put(&mut self, byte: u8) {
        self.0.push(byte);
    }
}

fn recorded(console: &Console<Recorder>) -> Vec<u8> {
    console.with_device(|r| r.0.clone()).unwrap_or_default()
}

#[test]
fn printing_before_init_produces_nothing() {
    let console: Console<Recorder> = Console::new();
    assert!(!console.is_initialized());

    console.print(format_args!("early {}", 1));
    console.println(format_args!("early {}", 2));

    // nothing was buffered for later delivery either
    console.install(Recorder::default());
    assert!(console.is_initialized());
    assert!(recorded(&console).is_empty());
}

#[test]
fn hello_world_is_exact() {
    let console = Console::new();
    console.install(Recorder::default());

    console.println(format_args!("Hello, world!"));
    assert_eq!(recorded(&console), b"Hello, world!\n");
}

#[test]
fn print_appends_no_terminator() {
    let console = Console::new();
    console.install(Recorder::default());

    console.print(format_args!("{}-{}", 1, 2));
    console.print(format_args!("{:>3}", 'x'));
    assert_eq!(recorded(&console), b"1-2  x");
}

#[test]
fn one_terminator_regardless_of_interpolations() {
    let console = Console::new();
    console.install(Recorder::default());

    console.println(format_args!("{} {} {}", "a", 'b', 3));
    console.println(format_args!(""));
    assert_eq!(recorded(&console), b"a b 3\n\n");
}

#[test]
fn with_device_is_none_before_init() {
    let console: Console<Recorder> = Console::new();
    let mut called = false;
    assert!(console.with_device(|_| called = true).is_none());
    assert!(!called);
}

#[test]
fn concurrent_println_lines_never_interleave() {
    let threads = 4;
    let lines = 200;

    let console = Arc::new(Console::new());
    console.install(Recorder::default());
    let start = Arc::new(Barrier::new(threads));

    let mut handles = Vec::with_capacity(threads);
    for id in 0..threads {
        let console = Arc::clone(&console);
        let start = Arc::clone(&start);
        handles.push(thread::spawn(move || {
            start.wait();
            for i in 0..lines {
                console.println(format_args!("thread {id} says line {i} of {lines}"));
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let out = String::from_utf8(recorded(&console)).unwrap();
    assert!(out.ends_with('\n'));

    let mut next = vec![0usize; threads];
    let mut count = 0;
    for line in out.lines() {
        let mut words = line.split(' ');
        assert_eq!(words.next(), Some("thread"), "garbled line: {line:?}");
        let id: usize = words.next().unwrap().parse().unwrap();
        assert_eq!(line, format!("thread {id} says line {} of {lines}", next[id]));
        next[id] += 1;
        count += 1;
    }
    assert_eq!(count, threads * lines);
    assert!(next.iter().all(|&n| n == lines));
}
