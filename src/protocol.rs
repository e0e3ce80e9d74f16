//! Wire commands for the daemon socket
//!
//! Daemon messages are a two-character opcode terminated by CRLF. This tool
//! only ever issues the state resend request; the response is treated as an
//! opaque byte stream.

/// Command sent to the daemon after connecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Ask the daemon to resend its full state (`RS`)
    ResendState,
}

impl Command {
    /// The two-character opcode
    pub fn code(&self) -> &'static str {
        match self {
            Self::ResendState => "RS",
        }
    }

    /// The exact bytes placed on the socket: opcode plus CRLF terminator
    pub fn wire(&self) -> &'static [u8] {
        match self {
            Self::ResendState => b"RS\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resend_state_wire_bytes() {
        let wire = Command::ResendState.wire();
        assert_eq!(wire, b"RS\r\n");
        assert_eq!(wire.len(), 4);
    }

    #[test]
    fn test_resend_state_code() {
        assert_eq!(Command::ResendState.code(), "RS");
    }
}
