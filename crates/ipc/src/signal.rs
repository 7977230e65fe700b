use crate::paths;
use nix::errno::Errno;
use nix::libc;
use std::ffi::CString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("invalid signal queue name")]
    InvalidName,
    #[error("signal queue full")]
    Full,
    #[error("signal queue operation failed: {0}")]
    Os(#[from] Errno),
}

/// The producer->consumer edges of the system, one signal queue each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    FrameCaptureToInference,
    FrameCaptureToGateway,
    DetectionInferenceToController,
}

impl SignalKind {
    pub fn name(self) -> &'static str {
        match self {
            SignalKind::FrameCaptureToInference => paths::SIGNAL_FRAME_INFERENCE,
            SignalKind::FrameCaptureToGateway => paths::SIGNAL_FRAME_GATEWAY,
            SignalKind::DetectionInferenceToController => paths::SIGNAL_DETECTION_CONTROLLER,
        }
    }
}

/// Edge-triggered wakeup between two processes.
///
/// A named POSIX message queue holding 1-byte tokens, bounded at
/// [`paths::SIGNAL_CAPACITY`]. The token content carries no meaning: the
/// authoritative "which record" information is the slot's sequence counter,
/// the queue only wakes the consumer up. A consumer that drains the queue
/// before reading the slot collapses any backlog into a single
/// latest-record read.
pub struct SignalQueue {
    mqd: libc::mqd_t,
}

impl SignalQueue {
    /// Open an existing queue. Fails if it has not been created yet.
    pub fn open(kind: SignalKind) -> Result<Self, SignalError> {
        Self::open_name(kind.name())
    }

    /// Unlink any stale queue of the same name, then create a fresh one.
    /// If a concurrent creator wins the race, opens the queue it created.
    pub fn create(kind: SignalKind) -> Result<Self, SignalError> {
        Self::create_name(kind.name())
    }

    /// Open the queue, creating it first if it does not exist.
    pub fn ensure(kind: SignalKind) -> Result<Self, SignalError> {
        Self::ensure_name(kind.name())
    }

    pub fn open_name(name: &str) -> Result<Self, SignalError> {
        let c_name = CString::new(name).map_err(|_| SignalError::InvalidName)?;

        let mqd = unsafe { libc::mq_open(c_name.as_ptr(), libc::O_RDWR) };
        if mqd == -1 {
            return Err(Errno::last().into());
        }

        Ok(Self { mqd })
    }

    pub fn create_name(name: &str) -> Result<Self, SignalError> {
        let c_name = CString::new(name).map_err(|_| SignalError::InvalidName)?;

        // Drop any queue left over from a previous run
        unsafe { libc::mq_unlink(c_name.as_ptr()) };

        let mut attr: libc::mq_attr = unsafe { std::mem::zeroed() };
        attr.mq_maxmsg = paths::SIGNAL_CAPACITY as libc::c_long;
        attr.mq_msgsize = 1;

        let mqd = unsafe {
            libc::mq_open(
                c_name.as_ptr(),
                libc::O_CREAT | libc::O_EXCL | libc::O_RDWR,
                0o660 as libc::c_uint,
                &attr as *const libc::mq_attr,
            )
        };
        if mqd == -1 {
            // Another creator got there between the unlink and the open
            if Errno::last() == Errno::EEXIST {
                return Self::open_name(name);
            }
            return Err(Errno::last().into());
        }

        Ok(Self { mqd })
    }

    pub fn ensure_name(name: &str) -> Result<Self, SignalError> {
        match Self::open_name(name) {
            Ok(queue) => Ok(queue),
            Err(_) => Self::create_name(name),
        }
    }

    /// Block until a token is available and consume it. Restarts on
    /// interrupt; fails only on unrecoverable queue errors.
    pub fn wait(&self) -> Result<(), SignalError> {
        let mut buf = [0u8; 1];
        let mut prio: libc::c_uint = 0;

        loop {
            let ret = unsafe {
                libc::mq_receive(
                    self.mqd,
                    buf.as_mut_ptr() as *mut libc::c_char,
                    buf.len(),
                    &mut prio,
                )
            };
            if ret >= 0 {
                return Ok(());
            }

            let errno = Errno::last();
            if errno == Errno::EINTR {
                continue;
            }
            return Err(errno.into());
        }
    }

    /// Consume one token without blocking. Returns true iff a token was
    /// consumed.
    pub fn try_wait(&self) -> Result<bool, SignalError> {
        let mut buf = [0u8; 1];
        let mut prio: libc::c_uint = 0;
        // Absolute timeout in the past makes the receive non-blocking
        let timeout = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };

        loop {
            let ret = unsafe {
                libc::mq_timedreceive(
                    self.mqd,
                    buf.as_mut_ptr() as *mut libc::c_char,
                    buf.len(),
                    &mut prio,
                    &timeout,
                )
            };
            if ret >= 0 {
                return Ok(true);
            }

            match Errno::last() {
                Errno::ETIMEDOUT | Errno::EAGAIN => return Ok(false),
                Errno::EINTR => continue,
                errno => return Err(errno.into()),
            }
        }
    }

    /// Consume every pending token; returns how many were drained.
    pub fn drain(&self) -> Result<usize, SignalError> {
        let mut count = 0;
        while self.try_wait()? {
            count += 1;
        }
        Ok(count)
    }

    /// Enqueue one token without blocking.
    ///
    /// A full queue returns [`SignalError::Full`]: the consumer already has
    /// a wakeup pending and will pick up the latest record from the slot,
    /// so dropping the token is safe.
    pub fn post(&self) -> Result<(), SignalError> {
        let token = [1u8; 1];
        let timeout = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };

        let ret = unsafe {
            libc::mq_timedsend(
                self.mqd,
                token.as_ptr() as *const libc::c_char,
                token.len(),
                0,
                &timeout,
            )
        };
        if ret == 0 {
            return Ok(());
        }

        match Errno::last() {
            Errno::ETIMEDOUT | Errno::EAGAIN => Err(SignalError::Full),
            errno => Err(errno.into()),
        }
    }

    /// Number of tokens currently queued.
    pub fn pending(&self) -> Result<usize, SignalError> {
        let mut attr: libc::mq_attr = unsafe { std::mem::zeroed() };
        let ret = unsafe { libc::mq_getattr(self.mqd, &mut attr) };
        if ret != 0 {
            return Err(Errno::last().into());
        }
        Ok(attr.mq_curmsgs as usize)
    }

    /// Remove the queue name from the system. Open descriptors stay valid
    /// until closed.
    pub fn unlink_name(name: &str) -> Result<(), SignalError> {
        let c_name = CString::new(name).map_err(|_| SignalError::InvalidName)?;
        let ret = unsafe { libc::mq_unlink(c_name.as_ptr()) };
        if ret != 0 {
            return Err(Errno::last().into());
        }
        Ok(())
    }
}

impl Drop for SignalQueue {
    fn drop(&mut self) {
        unsafe {
            libc::mq_close(self.mqd);
        }
    }
}

unsafe impl Send for SignalQueue {}
unsafe impl Sync for SignalQueue {}
