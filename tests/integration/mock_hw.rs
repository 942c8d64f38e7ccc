//! Mock hardware for integration tests.
//!
//! Two layers of fakes:
//!
//! - Port-level mocks ([`MockSensor`], [`MockActuators`], [`MockStatus`],
//!   [`FakeClock`]/[`FakeTicker`]) that record every call so tests can
//!   assert on the full history.
//! - Pin-level fakes ([`MockPin`], [`DhtBus`]) that stand in for GPIOs so
//!   the real adapters and the DHT22 driver run unmodified.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use climate::app::events::StatusReport;
use climate::app::model::{ActuatorCommand, SensorSample};
use climate::app::ports::{ActuatorPort, Clock, SensorPort, StatusSink, Ticker};
use climate::error::SensorFault;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

// ── Samples ───────────────────────────────────────────────────

/// A sample whose Fahrenheit conversion is `f` (humidity fixed at 50 %).
pub fn sample_f(f: f32) -> SensorSample {
    SensorSample {
        temperature_celsius: (f - 32.0) * 5.0 / 9.0,
        humidity_percent: 50.0,
    }
}

pub fn mins(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

// ── MockSensor ────────────────────────────────────────────────

/// Replays a script of read results.  Reading past the end panics, which
/// doubles as an assertion that a halted loop stopped reading.
pub struct MockSensor {
    script: VecDeque<Result<SensorSample, SensorFault>>,
    pub reads: usize,
}

#[allow(dead_code)]
impl MockSensor {
    pub fn new(script: impl IntoIterator<Item = Result<SensorSample, SensorFault>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            reads: 0,
        }
    }

    /// `n` identical good samples.
    pub fn steady(f: f32, n: usize) -> Self {
        Self::new(std::iter::repeat_n(Ok(sample_f(f)), n))
    }

    /// `n` good samples at `f`, then `fault`.
    pub fn failing_after(f: f32, n: usize, fault: SensorFault) -> Self {
        Self::new(std::iter::repeat_n(Ok(sample_f(f)), n).chain([Err(fault)]))
    }
}

impl SensorPort for MockSensor {
    fn read(&mut self) -> Result<SensorSample, SensorFault> {
        self.reads += 1;
        self.script
            .pop_front()
            .expect("sensor read after the script ran out")
    }
}

// ── MockActuators ─────────────────────────────────────────────

#[derive(Default)]
pub struct MockActuators {
    pub applied: Vec<ActuatorCommand>,
}

#[allow(dead_code)]
impl MockActuators {
    pub fn last(&self) -> Option<ActuatorCommand> {
        self.applied.last().copied()
    }
}

impl ActuatorPort for MockActuators {
    fn apply(&mut self, command: ActuatorCommand) {
        self.applied.push(command);
    }
}

// ── MockStatus ────────────────────────────────────────────────

/// Everything a status sink can observe, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusCall {
    Line(String),
    Fatal(SensorFault),
}

/// Records status output and models the power indicator.
pub struct MockStatus {
    pub calls: Vec<StatusCall>,
    pub reports: Vec<StatusReport>,
    pub indicator_on: bool,
}

#[allow(dead_code)]
impl MockStatus {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            reports: Vec::new(),
            indicator_on: true,
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                StatusCall::Line(l) => Some(l.as_str()),
                StatusCall::Fatal(_) => None,
            })
            .collect()
    }

    pub fn fatal(&self) -> Vec<SensorFault> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                StatusCall::Fatal(f) => Some(*f),
                StatusCall::Line(_) => None,
            })
            .collect()
    }
}

impl Default for MockStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for MockStatus {
    fn emit(&mut self, report: &StatusReport) {
        self.calls.push(StatusCall::Line(report.to_string()));
        self.reports.push(*report);
    }

    fn emit_fatal(&mut self, fault: SensorFault) {
        self.calls.push(StatusCall::Fatal(fault));
        self.indicator_on = false;
    }
}

// ── Fake time ─────────────────────────────────────────────────

/// Shared, manually advanced monotonic clock.
#[derive(Clone, Default)]
pub struct FakeClock(Rc<Cell<Duration>>);

#[allow(dead_code)]
impl FakeClock {
    pub fn at(t: Duration) -> Self {
        Self(Rc::new(Cell::new(t)))
    }

    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        self.0.get()
    }
}

/// Ticker that advances a [`FakeClock`] instead of sleeping.
pub struct FakeTicker {
    clock: FakeClock,
    interval: Duration,
    pub ticks: usize,
}

impl FakeTicker {
    pub fn new(clock: &FakeClock, interval: Duration) -> Self {
        Self {
            clock: clock.clone(),
            interval,
            ticks: 0,
        }
    }
}

impl Ticker for FakeTicker {
    fn wait_next(&mut self) {
        self.ticks += 1;
        self.clock.advance(self.interval);
    }
}

// ── Pin-level fakes ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin that remembers its level and can be told to fail.
#[derive(Default)]
pub struct MockPin {
    pub high: Option<bool>,
    pub writes: usize,
    pub fail: bool,
}

impl ErrorType for MockPin {
    type Error = PinFault;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), PinFault> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        self.write(true)
    }
}

impl MockPin {
    fn write(&mut self, high: bool) -> Result<(), PinFault> {
        if self.fail {
            return Err(PinFault);
        }
        self.writes += 1;
        self.high = Some(high);
        Ok(())
    }
}

/// `io::Write` that always fails, for best-effort output tests.
pub struct BrokenConsole;

impl std::io::Write for BrokenConsole {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("console unplugged"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("console unplugged"))
    }
}

// ── Simulated DHT22 bus ───────────────────────────────────────
//
// The bus keeps its own microsecond clock, advanced only by `SimDelay`.
// A host start signal (line held low for at least 1 ms, then released)
// triggers the next queued response; the sensor then drives the line
// with the datasheet waveform measured from the release instant.

/// Nominal widths (us) of the simulated sensor's waveform.
pub const WAIT_BEFORE_ACK_US: u64 = 20;
pub const ACK_LOW_US: u64 = 80;
pub const ACK_HIGH_US: u64 = 80;
pub const BIT_LOW_US: u64 = 50;
pub const ZERO_HIGH_US: u64 = 26;
pub const ONE_HIGH_US: u64 = 70;

/// What the simulated sensor does for one transaction.
#[derive(Debug, Clone)]
pub enum Response {
    /// Send this frame.
    Frame([u8; 5]),
    /// Send only the first `bits` bits of the frame, then let go.
    Truncated([u8; 5], usize),
    /// Never answer.
    Silent,
}

#[derive(Default)]
struct BusState {
    now_us: u64,
    host_low_since: Option<u64>,
    /// Active waveform: `(release_instant, [(high, width_us)])`.
    waveform: Option<(u64, Vec<(bool, u64)>)>,
    queue: VecDeque<Response>,
    fail_reads: bool,
    transactions: usize,
}

impl BusState {
    fn line_is_high(&self) -> bool {
        if self.host_low_since.is_some() {
            return false;
        }
        let Some((release, segments)) = &self.waveform else {
            return true;
        };
        let mut t = self.now_us - release;
        for &(high, width) in segments {
            if t < width {
                return high;
            }
            t -= width;
        }
        true
    }

    fn release(&mut self) {
        let Some(since) = self.host_low_since.take() else {
            return;
        };
        self.waveform = None;
        if self.now_us - since < 1_000 {
            return;
        }
        self.transactions += 1;
        if let Some(response) = self.queue.pop_front() {
            self.waveform = waveform(&response).map(|w| (self.now_us, w));
        }
    }
}

fn waveform(response: &Response) -> Option<Vec<(bool, u64)>> {
    let (frame, bits) = match response {
        Response::Frame(f) => (f, 40),
        Response::Truncated(f, n) => (f, *n),
        Response::Silent => return None,
    };
    let mut w = vec![
        (true, WAIT_BEFORE_ACK_US),
        (false, ACK_LOW_US),
        (true, ACK_HIGH_US),
    ];
    for bit in 0..bits {
        let one = frame[bit / 8] & (0x80 >> (bit % 8)) != 0;
        w.push((false, BIT_LOW_US));
        w.push((true, if one { ONE_HIGH_US } else { ZERO_HIGH_US }));
    }
    if bits == 40 {
        w.push((false, BIT_LOW_US));
    }
    Some(w)
}

/// Handle shared by the simulated pin, the delay and the test.
#[derive(Clone, Default)]
pub struct DhtBus(Rc<RefCell<BusState>>);

#[allow(dead_code)]
impl DhtBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: Response) {
        self.0.borrow_mut().queue.push_back(response);
    }

    pub fn fail_reads(&self) {
        self.0.borrow_mut().fail_reads = true;
    }

    /// Start signals seen so far.
    pub fn transactions(&self) -> usize {
        self.0.borrow().transactions
    }

    pub fn pin(&self) -> SimPin {
        SimPin(self.clone())
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay(self.clone())
    }
}

pub struct SimPin(DhtBus);

impl ErrorType for SimPin {
    type Error = PinFault;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), PinFault> {
        let mut bus = self.0.0.borrow_mut();
        if bus.host_low_since.is_none() {
            bus.host_low_since = Some(bus.now_us);
        }
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        self.0.0.borrow_mut().release();
        Ok(())
    }
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, PinFault> {
        let bus = self.0.0.borrow();
        if bus.fail_reads {
            return Err(PinFault);
        }
        Ok(bus.line_is_high())
    }

    fn is_low(&mut self) -> Result<bool, PinFault> {
        self.is_high().map(|h| !h)
    }
}

pub struct SimDelay(DhtBus);

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.0.borrow_mut().now_us += u64::from(ns.div_ceil(1_000));
    }
}

/// Build a valid frame for `rh_tenths` %RH and `t_tenths` °C.
pub fn dht_frame(rh_tenths: u16, t_tenths: i16) -> [u8; 5] {
    let rh = rh_tenths.to_be_bytes();
    let mut t = t_tenths.unsigned_abs().to_be_bytes();
    if t_tenths < 0 {
        t[0] |= 0x80;
    }
    let sum = rh[0]
        .wrapping_add(rh[1])
        .wrapping_add(t[0])
        .wrapping_add(t[1]);
    [rh[0], rh[1], t[0], t[1], sum]
}
