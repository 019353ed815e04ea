use std::io::{self, BufRead, ErrorKind};

use super::token::{
    is_line_end, is_reserved, Token, TokenKind, CARRIAGE_RETURN, LINE_FEED, SPACE,
};

/// Character-at-a-time scanner over a buffered reader.
///
/// `scan` never fails for lexical reasons: unexpected input reaches the
/// parser as ordinary tokens. Only failures of the underlying reader are
/// reported as errors.
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    // single character pushback, with its decoding status
    pending: Option<(char, bool)>,
    exhausted: bool,
    malformed: bool,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            exhausted: false,
            malformed: false,
        }
    }

    /// Returns the next token. Once end of input has been reached every
    /// further call returns [`TokenKind::EndOfInput`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn scan(&mut self) -> io::Result<Token> {
        self.malformed = false;
        let mut current = self.read()?;
        while current == Some(SPACE) {
            current = self.read()?;
        }

        let Some(c) = current else {
            return Ok(Token::end_of_input());
        };

        if c == LINE_FEED {
            return Ok(Token::end_of_line());
        }
        if c == CARRIAGE_RETURN {
            match self.read()? {
                Some(LINE_FEED) | None => {}
                Some(next) => self.unread(next, self.malformed),
            }
            return Ok(Token::end_of_line());
        }
        if let Some(kind) = TokenKind::from_punctuation(c) {
            return Ok(Token::punctuation(kind));
        }

        self.unread(c, self.malformed);
        self.scan_word()
    }

    fn scan_word(&mut self) -> io::Result<Token> {
        let mut word = String::new();

        while let Some(c) = self.read()? {
            if is_line_end(c) || is_reserved(c) {
                self.unread(c, false);
                break;
            }
            word.push(c);
        }

        if self.malformed {
            return Ok(Token::new(TokenKind::Illegal, word));
        }
        Ok(Token::from_word(word))
    }

    /// `malformed` marks a character that was decoded from invalid bytes, so
    /// the word it ends up in is still illegal after the flag is reset.
    fn unread(&mut self, c: char, malformed: bool) {
        debug_assert!(self.pending.is_none(), "pushback holds a single character");
        self.pending = Some((c, malformed));
    }

    /// Next character, or `None` at end of input.
    fn read(&mut self) -> io::Result<Option<char>> {
        if let Some((c, malformed)) = self.pending.take() {
            self.malformed |= malformed;
            return Ok(Some(c));
        }
        if self.exhausted {
            return Ok(None);
        }

        let Some(lead) = self.next_byte()? else {
            self.exhausted = true;
            return Ok(None);
        };
        self.decode(lead).map(Some)
    }

    fn decode(&mut self, lead: u8) -> io::Result<char> {
        let width = match lead {
            0x00..=0x7F => return Ok(char::from(lead)),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(self.replacement()),
        };

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(b) if b & 0xC0 == 0x80 => {
                    self.reader.consume(1);
                    *slot = b;
                }
                // leave the offending byte for the next read
                _ => return Ok(self.replacement()),
            }
        }

        match std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
        {
            Some(c) => Ok(c),
            None => Ok(self.replacement()),
        }
    }

    fn replacement(&mut self) -> char {
        self.malformed = true;
        char::REPLACEMENT_CHARACTER
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{BufReader, Cursor, Read};

    /// Every token up to, but not including, end of input.
    fn scan_all<R: BufRead>(reader: R) -> Vec<Token> {
        let mut scanner = Scanner::new(reader);
        let mut result = Vec::new();
        loop {
            let token = scanner.scan().unwrap();
            if token.is(TokenKind::EndOfInput) {
                return result;
            }
            result.push(token);
        }
    }

    fn tokens(input: &str) -> Vec<Token> {
        scan_all(Cursor::new(input.as_bytes()))
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokens(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_definition_line() {
        let result = tokens("GTR, gene1 = 1-100/3\n");
        assert_eq!(
            result,
            vec![
                Token::new(TokenKind::Identifier, "GTR"),
                Token::punctuation(TokenKind::Separator),
                Token::new(TokenKind::Identifier, "gene1"),
                Token::punctuation(TokenKind::Equal),
                Token::new(TokenKind::Decimal, "1"),
                Token::punctuation(TokenKind::Range),
                Token::new(TokenKind::Decimal, "100"),
                Token::punctuation(TokenKind::Modulo),
                Token::new(TokenKind::Decimal, "3"),
                Token::end_of_line(),
            ]
        );
    }

    #[test]
    fn test_line_endings_are_single_tokens() {
        assert_eq!(
            kinds("a\r\nb\nc\rd"),
            vec![
                TokenKind::Identifier,
                TokenKind::EndOfLine,
                TokenKind::Identifier,
                TokenKind::EndOfLine,
                TokenKind::Identifier,
                TokenKind::EndOfLine,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_cr_before_blank_line() {
        // "\r\r\n" is a lone CR followed by a CRLF
        assert_eq!(
            kinds("a\r\r\n"),
            vec![
                TokenKind::Identifier,
                TokenKind::EndOfLine,
                TokenKind::EndOfLine
            ]
        );
        assert_eq!(kinds("a\r"), vec![TokenKind::Identifier, TokenKind::EndOfLine]);
    }

    #[test]
    fn test_spaces_are_skipped() {
        let result = tokens("   HKY   ,  p  ");
        assert_eq!(
            result,
            vec![
                Token::new(TokenKind::Identifier, "HKY"),
                Token::punctuation(TokenKind::Separator),
                Token::new(TokenKind::Identifier, "p"),
            ]
        );
    }

    #[test]
    fn test_tab_is_part_of_identifier() {
        let result = tokens("a\tb");
        assert_eq!(result, vec![Token::new(TokenKind::Identifier, "a\tb")]);
    }

    #[test]
    fn test_mixed_word_is_identifier() {
        assert_eq!(
            tokens("12ab 34"),
            vec![
                Token::new(TokenKind::Identifier, "12ab"),
                Token::new(TokenKind::Decimal, "34"),
            ]
        );
    }

    #[test]
    fn test_isolated_punctuation_is_still_a_token() {
        assert_eq!(
            kinds("/ = - ,"),
            vec![
                TokenKind::Modulo,
                TokenKind::Equal,
                TokenKind::Range,
                TokenKind::Separator
            ]
        );
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut scanner = Scanner::new(Cursor::new("x".as_bytes()));
        assert_eq!(scanner.scan().unwrap().kind, TokenKind::Identifier);
        for _ in 0..3 {
            let token = scanner.scan().unwrap();
            assert_eq!(token, Token::end_of_input());
        }
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokens("").is_empty());
        assert!(tokens("     ").is_empty());
        assert_eq!(kinds("  \n "), vec![TokenKind::EndOfLine]);
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(
            tokens("模型,gène"),
            vec![
                Token::new(TokenKind::Identifier, "模型"),
                Token::punctuation(TokenKind::Separator),
                Token::new(TokenKind::Identifier, "gène"),
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_is_illegal() {
        let input: &[u8] = &[b'a', 0xFF, b'b', b',', b'c'];
        let result = scan_all(Cursor::new(input));
        assert_eq!(result[0].kind, TokenKind::Illegal);
        assert_eq!(result[1].kind, TokenKind::Separator);
        assert_eq!(result[2], Token::new(TokenKind::Identifier, "c"));
    }

    #[test]
    fn test_truncated_sequence_keeps_following_byte() {
        // 0xE6 starts a three byte sequence but '=' interrupts it
        let input: &[u8] = &[0xE6, b'=', b'1'];
        let result = scan_all(Cursor::new(input));
        assert_eq!(
            result.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Illegal, TokenKind::Equal, TokenKind::Decimal]
        );
    }

    #[test]
    fn test_small_buffer_reader() {
        let reader = BufReader::with_capacity(1, Cursor::new("HKY, p = 10-2é".as_bytes()));
        let result: Vec<_> = scan_all(reader)
            .into_iter()
            .map(|t| t.literal)
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(result, vec!["HKY", "p", "10", "2é"]);
    }

    #[test]
    fn test_invalid_utf8_after_carriage_return_is_illegal() {
        let after_cr = scan_all(Cursor::new(&b"\r\xFFx"[..]));
        assert_eq!(after_cr[0], Token::end_of_line());
        assert_eq!(after_cr[1].kind, TokenKind::Illegal);
        assert_eq!(after_cr[1].literal, "\u{FFFD}x");

        // a clean word pushed back after a CR stays an identifier
        let clean = scan_all(Cursor::new(&b"\r\xFFx\rok"[..]));
        assert_eq!(clean[3], Token::new(TokenKind::Identifier, "ok"));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_reader_failure_is_reported() {
        let mut scanner = Scanner::new(BufReader::new(FailingReader));
        let err = scanner.scan().unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
    }
}
