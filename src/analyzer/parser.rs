use std::io::{BufRead, BufReader, Read};

use super::core::{ParseError, ParseResult};
use crate::config::PartitionConfig;
use crate::partition::{PartitionSet, PartitionSetBuilder};
use crate::tokenizer::{
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// A range exactly as written: 1-based, defaults already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: i64,
    pub end: i64,
    pub modulo: i64,
}

impl RangeSpec {
    /// Zero-based inclusive bounds handed to the builder.
    pub fn zero_based(&self) -> (i64, i64) {
        (self.start - 1, self.end - 1)
    }
}

/// Recursive-descent parser for partition definitions.
///
/// ```text
/// line  := model "," partition "=" range ("," range)* (EOL | EOF)
/// range := DECIMAL ["-" DECIMAL] ["/" DECIMAL]
/// ```
///
/// A parser reads one stream once; every entry point consumes it.
pub struct Parser<R> {
    scanner: Scanner<R>,
    // one token of lookahead
    pending: Option<Token>,
    line: usize,
}

impl<R: Read> Parser<BufReader<R>> {
    pub fn new(reader: R) -> Self {
        Self::from_buf_read(BufReader::new(reader))
    }
}

impl<R: BufRead> Parser<R> {
    pub fn from_buf_read(reader: R) -> Self {
        Self {
            scanner: Scanner::new(reader),
            pending: None,
            line: 1,
        }
    }

    /// Parses into a fresh [`PartitionSet`] for an alignment of `alignment_length` sites.
    pub fn parse(self, alignment_length: usize) -> ParseResult<PartitionSet> {
        self.parse_with_config(alignment_length, PartitionConfig::default())
    }

    pub fn parse_with_config(
        self,
        alignment_length: usize,
        config: PartitionConfig,
    ) -> ParseResult<PartitionSet> {
        let mut set = PartitionSet::with_config(alignment_length, config);
        self.parse_into(&mut set)?;
        set.validate()?;
        Ok(set)
    }

    /// Drives `builder` with one `add_range` call per parsed interval and
    /// returns how many intervals were registered.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_into(mut self, builder: &mut dyn PartitionSetBuilder) -> ParseResult<usize> {
        let result = self.parse_lines(builder);
        match &result {
            Ok(count) => tracing::debug!(ranges = count, lines = self.line, "parse finished"),
            Err(e) => tracing::error!("{}", e),
        }
        result
    }

    fn parse_lines(&mut self, builder: &mut dyn PartitionSetBuilder) -> ParseResult<usize> {
        let first = self.scan()?;
        if !first.is(TokenKind::Identifier) {
            return Err(ParseError::MissingModelName {
                line: self.line,
                found: first,
            });
        }
        self.unscan(first);

        let mut registered = 0;
        while let Some(model) = self.parse_model_name()? {
            self.expect(TokenKind::Separator, |line, found| {
                ParseError::ExpectedModelSeparator { line, found }
            })?;
            let partition = self
                .expect(TokenKind::Identifier, |line, found| {
                    ParseError::ExpectedPartitionName { line, found }
                })?
                .literal;
            self.expect(TokenKind::Equal, |line, found| ParseError::ExpectedAssignment {
                line,
                found,
            })?;
            registered += self.parse_ranges(builder, &model, &partition)?;
        }
        Ok(registered)
    }

    /// Model name opening the next line, skipping blank lines; `None` at end of input.
    fn parse_model_name(&mut self) -> ParseResult<Option<String>> {
        loop {
            let token = self.scan()?;
            match token.kind {
                TokenKind::EndOfInput => return Ok(None),
                TokenKind::EndOfLine => self.line += 1,
                TokenKind::Identifier => return Ok(Some(token.literal)),
                _ => {
                    return Err(ParseError::ExpectedModelName {
                        line: self.line,
                        found: token,
                    })
                }
            }
        }
    }

    fn parse_ranges(
        &mut self,
        builder: &mut dyn PartitionSetBuilder,
        model: &str,
        partition: &str,
    ) -> ParseResult<usize> {
        let mut count = 0;
        loop {
            let range = self.parse_range()?;
            let (start, end) = range.zero_based();
            tracing::debug!(partition, model, start, end, modulo = range.modulo, "interval");
            builder.add_range(partition, model, start, end, range.modulo)?;
            count += 1;

            let token = self.scan()?;
            match token.kind {
                TokenKind::Separator => {}
                TokenKind::EndOfLine => {
                    self.line += 1;
                    return Ok(count);
                }
                TokenKind::EndOfInput => {
                    self.unscan(token);
                    return Ok(count);
                }
                _ => {
                    return Err(ParseError::ExpectedIntervalTerminator {
                        line: self.line,
                        found: token,
                    })
                }
            }
        }
    }

    fn parse_range(&mut self) -> ParseResult<RangeSpec> {
        let start = self.expect_decimal(|line, found| ParseError::ExpectedIntervalStart {
            line,
            found,
        })?;

        let mut end = start;
        let token = self.scan()?;
        if token.is(TokenKind::Range) {
            end = self.expect_decimal(|line, found| ParseError::ExpectedIntervalEnd {
                line,
                found,
            })?;
        } else {
            self.unscan(token);
        }

        let mut modulo = 1;
        let token = self.scan()?;
        if token.is(TokenKind::Modulo) {
            modulo = self.expect_decimal(|line, found| ParseError::ExpectedIntervalModulo {
                line,
                found,
            })?;
        } else {
            self.unscan(token);
        }

        Ok(RangeSpec { start, end, modulo })
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        error: impl FnOnce(usize, Token) -> ParseError,
    ) -> ParseResult<Token> {
        let token = self.scan()?;
        if token.is(kind) {
            Ok(token)
        } else {
            Err(error(self.line, token))
        }
    }

    fn expect_decimal(
        &mut self,
        error: impl FnOnce(usize, Token) -> ParseError,
    ) -> ParseResult<i64> {
        let token = self.scan()?;
        match token.decimal_value() {
            Some(value) => Ok(value),
            None => Err(error(self.line, token)),
        }
    }

    fn scan(&mut self) -> ParseResult<Token> {
        match self.pending.take() {
            Some(token) => Ok(token),
            None => Ok(self.scanner.scan()?),
        }
    }

    fn unscan(&mut self, token: Token) {
        debug_assert!(self.pending.is_none(), "lookahead holds a single token");
        self.pending = Some(token);
    }
}

/// Parses `reader` into a [`PartitionSet`] for an alignment of `alignment_length` sites.
///
/// ```rust
/// let set = partdef::parse_partitions("GTR, gene1 = 1-100\n".as_bytes(), 100).unwrap();
/// assert_eq!(set.get("gene1").unwrap().site_count(), 100);
/// ```
pub fn parse_partitions<R: Read>(reader: R, alignment_length: usize) -> ParseResult<PartitionSet> {
    Parser::new(reader).parse(alignment_length)
}
