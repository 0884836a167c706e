//! Genomic variant parser using nom
//!
//! Grammar: `[chr]CHROM:g.START[_END]EDIT`, e.g. `17:g.41242962_41242963insGA`.
//!
//! Each stage reports its own failure position so callers can point at the
//! offending part of the input.

use super::{Chromosome, GenomicEdit, GenomicVariant};
use crate::error::{Diagnostic, ErrorCode, NexusError, SourceSpan};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alphanumeric1, char, digit1},
    combinator::opt,
    sequence::preceded,
    IResult, Parser,
};

/// Variant shown in hints and in the search box example link.
pub const EXAMPLE_VARIANT: &str = "17:g.41242962_41242963insGA";

/// Nucleotides accepted in edits (A, C, G, T, N in either case)
const fn is_base(b: u8) -> bool {
    matches!(
        b,
        b'A' | b'C' | b'G' | b'T' | b'N' | b'a' | b'c' | b'g' | b't' | b'n'
    )
}

fn verify_error(input: &str) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Verify,
    ))
}

/// Parse a single nucleotide, uppercased
#[inline]
fn parse_base(input: &str) -> IResult<&str, char> {
    match input.as_bytes().first() {
        Some(&b) if is_base(b) => Ok((&input[1..], (b as char).to_ascii_uppercase())),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::OneOf,
        ))),
    }
}

/// Parse a nucleotide sequence, uppercased
#[inline]
fn parse_sequence(input: &str) -> IResult<&str, String> {
    let (rest, seq) = take_while1(|c: char| c.is_ascii() && is_base(c as u8)).parse(input)?;
    Ok((rest, seq.to_ascii_uppercase()))
}

/// Parse a chromosome name (with optional `chr` prefix)
fn parse_chromosome(input: &str) -> IResult<&str, Chromosome> {
    let (rest, name) = alphanumeric1.parse(input)?;
    let chromosome = name
        .parse::<Chromosome>()
        .map_err(|_| verify_error(input))?;
    Ok((rest, chromosome))
}

/// Parse a 1-based genomic position
///
/// Position 0 and values that overflow `u64` are rejected.
#[inline]
pub fn parse_position(input: &str) -> IResult<&str, u64> {
    let (rest, digits) = digit1.parse(input)?;
    let value: u64 = digits.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    if value == 0 {
        return Err(verify_error(input));
    }
    Ok((rest, value))
}

/// Parse `START` or `START_END`
fn parse_range(input: &str) -> IResult<&str, (u64, Option<u64>)> {
    let (rest, start) = parse_position(input)?;
    let (rest, end) = opt(preceded(char('_'), parse_position)).parse(rest)?;
    Ok((rest, (start, end)))
}

/// Parse a substitution (e.g., A>G)
fn parse_substitution(input: &str) -> IResult<&str, GenomicEdit> {
    let (rest, reference) = parse_base(input)?;
    let (rest, _) = char('>').parse(rest)?;
    let (rest, alternative) = parse_base(rest)?;
    Ok((
        rest,
        GenomicEdit::Substitution {
            reference,
            alternative,
        },
    ))
}

/// Parse a deletion-insertion that states the deleted bases (e.g., delAinsTT)
fn parse_delins_with_deleted(input: &str) -> IResult<&str, GenomicEdit> {
    let (rest, _) = tag("del").parse(input)?;
    let (rest, deleted) = parse_sequence(rest)?;
    let (rest, _) = tag("ins").parse(rest)?;
    let (rest, inserted) = parse_sequence(rest)?;
    Ok((
        rest,
        GenomicEdit::Delins {
            deleted: Some(deleted),
            inserted,
        },
    ))
}

/// Parse a deletion-insertion (e.g., delinsTT)
fn parse_delins(input: &str) -> IResult<&str, GenomicEdit> {
    let (rest, _) = tag("delins").parse(input)?;
    let (rest, inserted) = parse_sequence(rest)?;
    Ok((
        rest,
        GenomicEdit::Delins {
            deleted: None,
            inserted,
        },
    ))
}

/// Parse a deletion (e.g., del, delAT)
fn parse_deletion(input: &str) -> IResult<&str, GenomicEdit> {
    let (rest, _) = tag("del").parse(input)?;
    let (rest, sequence) = opt(parse_sequence).parse(rest)?;
    Ok((rest, GenomicEdit::Deletion { sequence }))
}

/// Parse an insertion (e.g., insGA)
fn parse_insertion(input: &str) -> IResult<&str, GenomicEdit> {
    let (rest, _) = tag("ins").parse(input)?;
    let (rest, sequence) = parse_sequence(rest)?;
    Ok((rest, GenomicEdit::Insertion { sequence }))
}

/// Parse a duplication (e.g., dup, dupA)
fn parse_duplication(input: &str) -> IResult<&str, GenomicEdit> {
    let (rest, _) = tag("dup").parse(input)?;
    let (rest, sequence) = opt(parse_sequence).parse(rest)?;
    Ok((rest, GenomicEdit::Duplication { sequence }))
}

/// Parse the edit portion of a genomic variant
pub fn parse_edit(input: &str) -> IResult<&str, GenomicEdit> {
    alt((
        parse_substitution,
        parse_delins_with_deleted, // Must come before delins and deletion (e.g., delAinsT)
        parse_delins,              // Must come before deletion
        parse_deletion,
        parse_insertion,
        parse_duplication,
    ))
    .parse(input)
}

fn input_error(
    input: &str,
    start: usize,
    end: usize,
    code: ErrorCode,
    msg: &str,
    hint: &str,
) -> NexusError {
    let diagnostic = Diagnostic::new()
        .with_code(code)
        .with_span(SourceSpan::new(start, end))
        .with_source(input)
        .with_hint(hint);
    NexusError::invalid_input(input, start, msg, diagnostic)
}

/// Parse a genomic variant identifier
///
/// Leading and trailing whitespace is ignored. Error positions are byte
/// offsets into the untrimmed input.
///
/// # Example
///
/// ```
/// use ferro_nexus::variant::{parse_genomic_variant, Chromosome};
///
/// let variant = parse_genomic_variant("chr17:g.41242962_41242963insga").unwrap();
/// assert_eq!(variant.chromosome, Chromosome::Autosome(17));
/// assert_eq!(variant.to_string(), "17:g.41242962_41242963insGA");
/// ```
pub fn parse_genomic_variant(input: &str) -> Result<GenomicVariant, NexusError> {
    let lead = input.len() - input.trim_start().len();
    let body = input.trim();
    if body.is_empty() {
        return Err(input_error(
            input,
            0,
            input.len(),
            ErrorCode::EmptyInput,
            "empty variant",
            &format!("enter a genomic variant such as {}", EXAMPLE_VARIANT),
        ));
    }
    let offset = |rest: &str| lead + body.len() - rest.len();

    let (after_chrom, chromosome) = parse_chromosome(body).map_err(|_| {
        let name_len = body.find(':').unwrap_or(body.len()).max(1);
        input_error(
            input,
            lead,
            lead + name_len,
            ErrorCode::InvalidChromosome,
            "unknown or missing chromosome",
            "chromosomes are 1-22, X, Y or MT, optionally prefixed with 'chr'",
        )
    })?;

    let (after_prefix, _) = tag::<_, _, nom::error::Error<&str>>(":g.")
        .parse(after_chrom)
        .map_err(|_| {
            let pos = offset(after_chrom);
            input_error(
                input,
                pos,
                pos + 1,
                ErrorCode::InvalidPrefix,
                "expected ':g.' after the chromosome",
                "only genomic (g.) coordinates are supported",
            )
        })?;

    let range_start = offset(after_prefix);
    let (after_range, (start, end)) = parse_range(after_prefix).map_err(|_| {
        input_error(
            input,
            range_start,
            range_start + 1,
            ErrorCode::InvalidPosition,
            "expected a position of 1 or more",
            "positions are 1-based integers, ranges are written START_END",
        )
    })?;

    if after_range.starts_with('_') {
        let pos = offset(after_range);
        return Err(input_error(
            input,
            pos,
            pos + 1,
            ErrorCode::InvalidPosition,
            "expected an end position after '_'",
            "positions are 1-based integers, ranges are written START_END",
        ));
    }

    let edit_start = offset(after_range);
    if let Some(end) = end {
        if end <= start {
            return Err(input_error(
                input,
                range_start,
                edit_start,
                ErrorCode::InvalidPosition,
                "range end must be greater than range start",
                "write the lower position first",
            ));
        }
    }

    let (rest, edit) = parse_edit(after_range).map_err(|_| {
        input_error(
            input,
            edit_start,
            edit_start + 1,
            ErrorCode::InvalidEdit,
            "expected an edit",
            "supported edits are A>G, del, delA, insGA, delinsTT, delAinsT and dup",
        )
    })?;

    if !rest.is_empty() {
        let pos = offset(rest);
        return Err(input_error(
            input,
            pos,
            lead + body.len(),
            ErrorCode::TrailingInput,
            "unexpected characters after the edit",
            "remove everything after the edit",
        ));
    }

    match (&edit, end) {
        (GenomicEdit::Insertion { .. }, Some(end)) if end == start + 1 => {}
        (GenomicEdit::Insertion { .. }, _) => {
            return Err(input_error(
                input,
                range_start,
                edit_start,
                ErrorCode::InvalidEdit,
                "an insertion must name two adjacent flanking positions",
                EXAMPLE_VARIANT,
            ));
        }
        (GenomicEdit::Substitution { .. }, Some(_)) => {
            return Err(input_error(
                input,
                range_start,
                edit_start,
                ErrorCode::InvalidEdit,
                "a substitution names a single position",
                "use delins for multi-base changes",
            ));
        }
        (
            GenomicEdit::Substitution {
                reference,
                alternative,
            },
            None,
        ) if reference == alternative => {
            return Err(input_error(
                input,
                edit_start,
                offset(rest),
                ErrorCode::InvalidEdit,
                "a substitution must change the reference base",
                "the alternate base must differ from the reference base",
            ));
        }
        _ => {}
    }

    Ok(GenomicVariant {
        chromosome,
        start,
        end,
        edit,
    })
}
