//! Sliding-window chunking strategy

use crate::domain::{Chunk, ChunkingConfig, ChunkingStrategy, DomainError};

/// Chunking strategy that splits text into overlapping fixed-size windows.
///
/// Windows are measured in characters and aligned to char boundaries, so the
/// same input always yields the same chunk sequence and consecutive chunks
/// overlap by exactly `chunk_overlap` characters (except possibly the last).
#[derive(Debug, Clone, Default)]
pub struct SlidingWindowChunker;

impl SlidingWindowChunker {
    /// Create a new sliding-window chunker
    pub fn new() -> Self {
        Self
    }
}

impl ChunkingStrategy for SlidingWindowChunker {
    fn chunk(&self, content: &str, config: &ChunkingConfig) -> Result<Vec<Chunk>, DomainError> {
        config.validate()?;

        let content = content.trim();

        if content.is_empty() {
            return Ok(vec![]);
        }

        // Byte offsets of char boundaries, so windows never split a code point
        let boundaries: Vec<usize> = content
            .char_indices()
            .map(|(i, _)| i)
            .chain([content.len()])
            .collect();
        let total_chars = boundaries.len() - 1;

        if total_chars <= config.chunk_size {
            return Ok(vec![Chunk::new(content, 0)]);
        }

        let step = config.chunk_size - config.chunk_overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let end = (start + config.chunk_size).min(total_chars);
            let window = &content[boundaries[start]..boundaries[end]];
            chunks.push(Chunk::new(window, chunks.len()));

            if end == total_chars {
                break;
            }

            start += step;
        }

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "sliding_window"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        let chunker = SlidingWindowChunker::new();
        let config = ChunkingConfig::default();

        let chunks = chunker.chunk("", &config).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        let chunker = SlidingWindowChunker::new();
        let config = ChunkingConfig::default();

        let chunks = chunker.chunk("   \n\t  ", &config).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_small_content() {
        let chunker = SlidingWindowChunker::new();
        let config = ChunkingConfig::new(1000, 200);

        let chunks = chunker.chunk("Hello, World!", &config).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "Hello, World!");
        assert_eq!(chunks[0].index, 0);
    }

    #[test]
    fn test_exact_windows_and_overlap() {
        let chunker = SlidingWindowChunker::new();
        let config = ChunkingConfig::new(6, 2);

        let chunks = chunker.chunk("abcdefghijklmnop", &config).unwrap();

        assert_eq!(chunks[0].content, "abcdef");
        assert_eq!(chunks[1].content, "efghij");
        assert_eq!(chunks[2].content, "ijklmn");

        for pair in chunks.windows(2) {
            let prev_tail: String = pair[0].content.chars().rev().take(2).collect();
            let next_head: String = pair[1].content.chars().take(2).collect();
            let prev_tail: String = prev_tail.chars().rev().collect();
            assert_eq!(prev_tail, next_head);
        }
    }

    #[test]
    fn test_last_chunk_may_be_short() {
        let chunker = SlidingWindowChunker::new();
        let config = ChunkingConfig::new(10, 2);

        let content = "abcdefghijklmnopqrs";
        let chunks = chunker.chunk(content, &config).unwrap();

        let last = chunks.last().unwrap();
        assert!(last.content.len() <= config.chunk_size);
        assert!(last.content.ends_with('s'));
    }

    #[test]
    fn test_deterministic() {
        let chunker = SlidingWindowChunker::new();
        let config = ChunkingConfig::new(50, 10);

        let content = "The deductible is $500. ".repeat(20);
        let first = chunker.chunk(&content, &config).unwrap();
        let second = chunker.chunk(&content, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_indices_are_sequential() {
        let chunker = SlidingWindowChunker::new();
        let config = ChunkingConfig::new(20, 5);

        let content = "word ".repeat(30);
        let chunks = chunker.chunk(&content, &config).unwrap();

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
        }
    }

    #[test]
    fn test_multibyte_content() {
        let chunker = SlidingWindowChunker::new();
        let config = ChunkingConfig::new(4, 1);

        let content = "héllö wörld ünïcödé tëxt";
        let chunks = chunker.chunk(content, &config).unwrap();

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.content.chars().count() <= 4);
        }
    }

    #[test]
    fn test_invalid_config() {
        let chunker = SlidingWindowChunker::new();
        let config = ChunkingConfig::new(0, 0);

        let result = chunker.chunk("content", &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(SlidingWindowChunker::new().name(), "sliding_window");
    }
}
