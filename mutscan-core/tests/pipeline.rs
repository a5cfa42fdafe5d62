use mutscan_core::seq::{translate, DnaSeq, Gene, QualityTrace};
use mutscan_core::{
    analyze, analyze_batch, analyze_with_offset, assign_gene, AnalysisConfig, AnalyzedSequence,
    BioError,
};

// Each pair encodes the same residue; glycine is left out on purpose.
const SYNONYMS: [(&[u8; 3], &[u8; 3]); 12] = [
    (b"GCT", b"GCC"),
    (b"CTG", b"CTA"),
    (b"AAA", b"AAG"),
    (b"GAA", b"GAG"),
    (b"TCT", b"TCC"),
    (b"GTT", b"GTC"),
    (b"ACT", b"ACC"),
    (b"CGT", b"CGC"),
    (b"GAT", b"GAC"),
    (b"AAT", b"AAC"),
    (b"CCT", b"CCC"),
    (b"ATT", b"ATC"),
];

const LEFT_VECTOR: &[u8] = b"GGGGCGGCCG";
const RIGHT_VECTOR: &[u8] = b"GGCCGGGGCC";

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % SYNONYMS.len() as u64) as usize
    }
}

/// 150 codons drawn from the first member of each synonym pair.
fn synthetic_codons(seed: u64) -> Vec<usize> {
    let mut rng = Lcg(seed);
    (0..150).map(|_| rng.next()).collect()
}

fn gene_bytes(codons: &[usize]) -> Vec<u8> {
    codons.iter().flat_map(|&c| SYNONYMS[c].0.to_vec()).collect()
}

fn gene(id: u32, seed: u64) -> Gene {
    let seq = DnaSeq::new(gene_bytes(&synthetic_codons(seed))).unwrap();
    Gene::new(id, format!("gene{id}"), seq)
}

fn read(bytes: Vec<u8>) -> AnalyzedSequence {
    let quality = QualityTrace::new(vec![40; bytes.len()]);
    AnalyzedSequence::new("read", DnaSeq::new(bytes).unwrap(), quality).unwrap()
}

#[test]
fn clean_read_with_left_vector() {
    let gene = gene(1, 7);
    let mut bytes = LEFT_VECTOR.to_vec();
    bytes.extend_from_slice(&gene.seq().as_bytes()[..240]);

    let out = analyze(read(bytes), &gene, &AnalysisConfig::default()).unwrap();
    assert_eq!(out.offset, Some(-10));
    assert!(!out.reversed);
    assert_eq!(out.left_vector.as_bytes(), LEFT_VECTOR);
    assert!(out.right_vector.is_empty());
    assert_eq!(out.trimmed.as_bytes(), &gene.seq().as_bytes()[..240]);
    assert!(out.mutations.is_empty());
    assert!((out.trim_percentage - 4.0).abs() < 1e-10);
}

#[test]
fn right_vector_is_cut_at_gene_end() {
    let gene = gene(1, 7);
    let mut bytes = gene.seq().as_bytes()[300..].to_vec();
    bytes.extend_from_slice(RIGHT_VECTOR);

    let out = analyze(read(bytes), &gene, &AnalysisConfig::default()).unwrap();
    assert_eq!(out.offset, Some(300));
    assert_eq!(out.gene_start, 300);
    assert_eq!(out.right_vector.as_bytes(), RIGHT_VECTOR);
    assert!(out.mutations.is_empty());
}

#[test]
fn missense_and_silent_calls() {
    let codons = synthetic_codons(7);
    let gene = gene(1, 7);
    let reference_aa = translate(gene.seq().as_bytes()).unwrap();

    let mut bytes = gene.seq().as_bytes()[..240].to_vec();
    bytes[30..33].copy_from_slice(b"TGG");
    bytes[60..63].copy_from_slice(SYNONYMS[codons[20]].1);

    let out = analyze(read(bytes), &gene, &AnalysisConfig::default()).unwrap();
    assert_eq!(out.offset, Some(0));
    assert_eq!(
        out.mutation_strings(),
        vec![
            format!("W11{}", reference_aa[10] as char),
            format!("{0}21{0}", reference_aa[20] as char),
        ]
    );
    assert!(!out.mutations[0].is_silent());
    assert!(out.mutations[1].is_silent());
}

#[test]
fn inserted_codon_keeps_the_frame() {
    let gene = gene(1, 7);
    let g = gene.seq().as_bytes();
    let mut bytes = g[..120].to_vec();
    bytes.extend_from_slice(b"TGG");
    bytes.extend_from_slice(&g[120..240]);

    let out = analyze(read(bytes), &gene, &AnalysisConfig::default()).unwrap();
    assert_eq!(out.offset, Some(0));
    assert_eq!(out.mutation_strings(), vec!["+1W41"]);
    assert!(!out.reading_frame_error);
}

#[test]
fn deleted_codon_keeps_the_frame() {
    let gene = gene(1, 7);
    let g = gene.seq().as_bytes();
    let aa = translate(g).unwrap();
    // A residue unlike both neighbours, so the deletion has exactly one placement.
    let k = (40..aa.len() - 1)
        .find(|&k| aa[k - 1] != aa[k] && aa[k] != aa[k + 1])
        .unwrap();
    let mut bytes = g[..3 * k].to_vec();
    bytes.extend_from_slice(&g[3 * k + 3..240]);

    let out = analyze(read(bytes), &gene, &AnalysisConfig::default()).unwrap();
    assert_eq!(out.offset, Some(0));
    assert_eq!(
        out.mutation_strings(),
        vec![format!("-1{}{}", aa[k] as char, k + 1)]
    );
    assert!(!out.reading_frame_error);
}

#[test]
fn low_quality_tail_is_trimmed() {
    let gene = gene(1, 7);
    let bytes = gene.seq().as_bytes()[..240].to_vec();
    let mut scores = vec![40; 230];
    scores.extend_from_slice(&[0; 10]);
    let read = AnalyzedSequence::new("read", DnaSeq::new(bytes).unwrap(), scores.into()).unwrap();

    let out = analyze(read, &gene, &AnalysisConfig::default()).unwrap();
    assert_eq!(out.trimmed.len(), 230);
    assert!((out.trim_percentage - 10.0 * 100.0 / 240.0).abs() < 1e-10);
    assert!(out.mutations.is_empty());
}

#[test]
fn reverse_strand_read_is_flipped() {
    let gene = gene(1, 7);
    let forward = DnaSeq::new(gene.seq().as_bytes()[..240].to_vec()).unwrap();
    let config = AnalysisConfig::default().with_min_anchor_len(20);

    let out = analyze(
        read(forward.reverse_complement().unwrap().as_bytes().to_vec()),
        &gene,
        &config,
    )
    .unwrap();
    assert!(out.reversed);
    assert_eq!(out.offset, Some(0));
    assert_eq!(out.seq, forward);
    assert!(out.mutations.is_empty());
}

#[test]
fn unrelated_read_has_no_offset() {
    let gene = gene(1, 7);
    let bytes = b"ACGT".repeat(30);
    let err = analyze(read(bytes), &gene, &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, BioError::OffsetNotFound { anchor_len: 9 }));
}

#[test]
fn scrambled_read_is_a_reading_frame_error() {
    let gene = gene(1, 7);
    let bytes = b"GGG".repeat(110);
    let out = analyze_with_offset(read(bytes), &gene, 0, &AnalysisConfig::default()).unwrap();
    assert!(out.reading_frame_error);
    assert!(out.mutations.is_empty());
}

#[test]
fn batch_keeps_input_order() {
    let gene = gene(1, 7);
    let mut good = LEFT_VECTOR.to_vec();
    good.extend_from_slice(&gene.seq().as_bytes()[..240]);
    let reads = vec![read(good), read(b"ACGT".repeat(30))];

    let results = analyze_batch(&reads, &gene, &AnalysisConfig::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().offset, Some(-10));
    assert!(results[1].is_err());
}

#[test]
fn read_is_assigned_to_matching_gene() {
    let genes = vec![gene(1, 11), gene(2, 7)];
    let mut bytes = LEFT_VECTOR.to_vec();
    bytes.extend_from_slice(&genes[1].seq().as_bytes()[..240]);
    let seq = DnaSeq::new(bytes).unwrap();
    let config = AnalysisConfig::default().with_min_anchor_len(30);

    let (hit, offset) = assign_gene(&seq, &genes, &config).unwrap();
    assert_eq!(hit.id, 2);
    assert_eq!(offset, -10);
}
