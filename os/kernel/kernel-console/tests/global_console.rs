//! Exercises the process-wide console. Everything lives in one test because
//! the registry transitions exactly once per process.

use core::cell::UnsafeCell;
use core::ptr;
use kernel_console::{CONSOLE, ConsoleLogger, init_console, poll_byte, print, println};
use kernel_uart::registers::{
    BLOCK_SIZE, DATA, FIFO_CONTROL, INTERRUPT_ENABLE, LINE_CONTROL, LINE_STATUS,
};
use log::LevelFilter;

#[repr(C, align(8))]
struct SimulatedRegisters {
    cells: UnsafeCell<[u8; BLOCK_SIZE]>,
}

impl SimulatedRegisters {
    fn leak() -> &'static Self {
        Box::leak(Box::new(Self {
            cells: UnsafeCell::new([0; BLOCK_SIZE]),
        }))
    }

    fn base(&self) -> usize {
        self.cells.get().cast::<u8>().expose_provenance()
    }

    fn peek(&self, offset: usize) -> u8 {
        unsafe { ptr::read_volatile(self.cells.get().cast::<u8>().add(offset)) }
    }

    fn poke(&self, offset: usize, value: u8) {
        unsafe { ptr::write_volatile(self.cells.get().cast::<u8>().add(offset), value) }
    }
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(LevelFilter::Info);

#[test]
fn console_lifecycle() {
    let regs = SimulatedRegisters::leak();
    regs.poke(DATA, 0xAA);

    LOGGER.init().unwrap();

    // Uninitialized: everything is dropped, the device is never touched.
    assert!(!CONSOLE.is_initialized());
    print!("lost {}", 1);
    println!("lost {}", 2);
    println!();
    log::info!("lost as well");
    assert_eq!(poll_byte(), None);
    assert_eq!(regs.peek(DATA), 0xAA);
    assert_eq!(regs.peek(LINE_CONTROL), 0);

    unsafe { init_console(regs.base()) };
    assert!(CONSOLE.is_initialized());
    assert_eq!(regs.peek(LINE_CONTROL), 0b11);
    assert_eq!(regs.peek(FIFO_CONTROL), 0b1);
    assert_eq!(regs.peek(INTERRUPT_ENABLE), 0b1);
    assert_eq!(CONSOLE.with_device(|uart| uart.base()), Some(regs.base()));

    print!("Hello, world!");
    assert_eq!(regs.peek(DATA), b'!');
    println!("Hello, world!");
    assert_eq!(regs.peek(DATA), b'\n');

    print!("{}", "x");
    assert_eq!(regs.peek(DATA), b'x');
    log::info!("logged {}", 42);
    assert_eq!(regs.peek(DATA), b'\n');

    print!("y");
    log::debug!("below the level filter");
    assert_eq!(regs.peek(DATA), b'y');

    // polling
    assert_eq!(poll_byte(), None);
    regs.poke(DATA, b'r');
    regs.poke(LINE_STATUS, 1);
    assert_eq!(poll_byte(), Some(b'r'));
}
