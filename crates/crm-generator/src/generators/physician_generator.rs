//! 医生数据生成器
//!
//! 基于注入的词表和随机源批量生成测试医生记录。
//! 随机源可替换为固定种子的 `StdRng`，使测试可以断言确切输出。

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use crm_shared::config::GeneratorConfig;
use crm_shared::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::vocabulary::Vocabulary;
use crate::models::{PhysicianRecord, TEST_MARKER_PREFIX, TEST_ONLY_TAG};

/// 医生数据生成器
///
/// 生成日期在创建时确定，同一次运行中的所有记录共享该日期
pub struct PhysicianGenerator<R> {
    config: GeneratorConfig,
    vocabulary: Vocabulary,
    rng: R,
    generated_on: NaiveDate,
}

impl PhysicianGenerator<StdRng> {
    /// 使用系统熵源创建生成器
    pub fn from_entropy(config: GeneratorConfig, vocabulary: Vocabulary) -> Result<Self> {
        Self::new(config, vocabulary, StdRng::from_entropy())
    }

    /// 使用固定种子创建生成器，相同种子与日期产生相同输出
    pub fn seeded(config: GeneratorConfig, vocabulary: Vocabulary, seed: u64) -> Result<Self> {
        Self::new(config, vocabulary, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PhysicianGenerator<R> {
    /// 创建生成器
    ///
    /// 词表中任一列表为空时返回错误
    pub fn new(config: GeneratorConfig, vocabulary: Vocabulary, rng: R) -> Result<Self> {
        vocabulary.validate()?;
        Ok(Self {
            config,
            vocabulary,
            rng,
            generated_on: Local::now().date_naive(),
        })
    }

    /// 覆盖生成日期
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    /// 生成指定数量的记录，count 为 0 时返回空列表
    pub fn generate(&mut self, count: usize) -> Vec<PhysicianRecord> {
        (0..count).map(|_| self.generate_one()).collect()
    }

    /// 生成单条记录
    pub fn generate_one(&mut self) -> PhysicianRecord {
        let name = self.random_name();
        let state = pick(&mut self.rng, &self.vocabulary.states).to_string();
        let license_id = self.license_for_state(&state);
        let specialty = pick(&mut self.rng, &self.vocabulary.specialties).to_string();
        let email = self.email_for(&name);
        let phone = self.random_phone();

        PhysicianRecord {
            name,
            license_id,
            state,
            specialty,
            email,
            phone,
            record_type: TEST_ONLY_TAG.to_string(),
            generated_on: self.generated_on,
        }
    }

    /// 名与姓独立抽取
    pub fn random_name(&mut self) -> String {
        let first = pick(&mut self.rng, &self.vocabulary.first_names);
        let last = pick(&mut self.rng, &self.vocabulary.last_names);
        format!("{first} {last}")
    }

    /// 生成带测试标记的执业编号，如 `TEST-CRM-SP-004217`
    pub fn license_for_state(&mut self, state: &str) -> String {
        let number: u32 = self.rng.gen_range(100_000..=999_999);
        format!("{TEST_MARKER_PREFIX}{state}-{number:06}")
    }

    /// 由姓名派生邮箱
    ///
    /// 不保证唯一，同名医生可能得到相同邮箱
    pub fn email_for(&mut self, name: &str) -> String {
        let suffix: u8 = self.rng.gen_range(1..=99);
        format!(
            "{}.{}@{}",
            email_local_part(name),
            suffix,
            self.config.email_domain
        )
    }

    /// 电话格式：`+55 (DD) 9NNNN-NNNN`
    pub fn random_phone(&mut self) -> String {
        let area: u8 = self.rng.gen_range(11..=99);
        let prefix: u16 = self.rng.gen_range(8000..=9999);
        let line: u16 = self.rng.gen_range(1000..=9999);
        format!(
            "+{} ({area}) 9{prefix}-{line}",
            self.config.phone_country_code
        )
    }

    /// 获取生成日期
    pub fn generated_on(&self) -> NaiveDate {
        self.generated_on
    }
}

/// 从非空列表中均匀抽取一项
///
/// 列表非空由 `Vocabulary::validate` 保证
fn pick<'a, R: Rng>(rng: &mut R, items: &'a [String]) -> &'a str {
    &items[rng.gen_range(0..items.len())]
}

/// 邮箱本地部分：小写，空格替换为 `.`，常见重音字符去掉重音
pub fn email_local_part(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' => '.',
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// 统计数据生成结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub total: usize,
    pub by_state: BTreeMap<String, usize>,
    pub by_specialty: BTreeMap<String, usize>,
}

impl GenerationStats {
    /// 从生成的记录中收集统计信息
    pub fn from_records(records: &[PhysicianRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            *stats.by_state.entry(record.state.clone()).or_default() += 1;
            *stats
                .by_specialty
                .entry(record.specialty.clone())
                .or_default() += 1;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn seeded(seed: u64) -> PhysicianGenerator<StdRng> {
        PhysicianGenerator::seeded(GeneratorConfig::default(), Vocabulary::default(), seed)
            .unwrap()
            .with_date(date())
    }

    #[test]
    fn test_generate_count() {
        let mut generator = seeded(1);
        assert_eq!(generator.generate(25).len(), 25);
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_records_are_test_marked() {
        let mut generator = seeded(7);
        let vocabulary = Vocabulary::default();

        for record in generator.generate(200) {
            assert!(record.has_test_license(TEST_MARKER_PREFIX), "{}", record.license_id);
            assert!(vocabulary.states.contains(&record.state));
            assert!(vocabulary.specialties.contains(&record.specialty));
            assert_eq!(record.record_type, TEST_ONLY_TAG);
            assert_eq!(record.generated_on, date());
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let first = seeded(42).generate(20);
        let second = seeded(42).generate(20);
        assert_eq!(first, second);

        let other = seeded(43).generate(20);
        assert_ne!(first, other);
    }

    #[test]
    fn test_single_entry_vocabulary() {
        let vocabulary = Vocabulary {
            first_names: vec!["João".to_string()],
            last_names: vec!["Araújo".to_string()],
            states: vec!["PE".to_string()],
            specialties: vec!["Urologia".to_string()],
        };
        let mut generator =
            PhysicianGenerator::seeded(GeneratorConfig::default(), vocabulary, 3).unwrap();

        let record = generator.generate_one();
        assert_eq!(record.name, "João Araújo");
        assert_eq!(record.state, "PE");
        assert_eq!(record.specialty, "Urologia");
        assert!(record.license_id.starts_with("TEST-CRM-PE-"));
        assert!(record.email.starts_with("joao.araujo."));
        assert!(record.email.ends_with("@example.test"));
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let vocabulary = Vocabulary {
            specialties: Vec::new(),
            ..Vocabulary::default()
        };
        let result = PhysicianGenerator::seeded(GeneratorConfig::default(), vocabulary, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_email_suffix_range() {
        let mut generator = seeded(11);
        for _ in 0..200 {
            let email = generator.email_for("Ana Silva");
            let suffix: u8 = email
                .strip_prefix("ana.silva.")
                .and_then(|rest| rest.strip_suffix("@example.test"))
                .unwrap()
                .parse()
                .unwrap();
            assert!((1..=99).contains(&suffix));
        }
    }

    #[test]
    fn test_email_local_part() {
        assert_eq!(email_local_part("Vinícius Araújo"), "vinicius.araujo");
        assert_eq!(email_local_part("João Gonçalves"), "joao.goncalves");
        assert_eq!(email_local_part("Ana Silva"), "ana.silva");
    }

    #[test]
    fn test_phone_format() {
        let mut generator = seeded(5);
        for _ in 0..100 {
            let phone = generator.random_phone();
            // +55 (DD) 9NNNN-NNNN
            assert_eq!(phone.len(), 19, "{phone}");
            assert!(phone.starts_with("+55 ("));
            assert_eq!(&phone[7..10], ") 9");

            let area: u8 = phone[5..7].parse().unwrap();
            assert!((11..=99).contains(&area));
            let prefix: u16 = phone[10..14].parse().unwrap();
            assert!((8000..=9999).contains(&prefix));
            assert_eq!(&phone[14..15], "-");
            let line: u16 = phone[15..].parse().unwrap();
            assert!((1000..=9999).contains(&line));
        }
    }

    #[test]
    fn test_custom_config_keeps_test_markers() {
        let config = GeneratorConfig {
            default_quantity: 3,
            email_domain: "qa.invalid".to_string(),
            phone_country_code: 1,
            ..GeneratorConfig::default()
        };
        let mut generator = PhysicianGenerator::seeded(config, Vocabulary::default(), 9)
            .unwrap()
            .with_date(date());

        // 可配置项只影响邮箱与电话，测试标记始终不变
        for record in generator.generate(100) {
            assert!(record.has_test_license(TEST_MARKER_PREFIX), "{}", record.license_id);
            assert!(record.license_id.starts_with(&format!("TEST-CRM-{}-", record.state)));
            assert_eq!(record.record_type, TEST_ONLY_TAG);
            assert!(record.email.ends_with("@qa.invalid"));
            assert!(record.phone.starts_with("+1 ("));
            assert_eq!(record.generated_on, date());
        }
    }

    #[test]
    fn test_generation_stats() {
        let records = seeded(21).generate(50);
        let stats = GenerationStats::from_records(&records);

        assert_eq!(stats.total, 50);
        assert_eq!(stats.by_state.values().sum::<usize>(), 50);
        assert_eq!(stats.by_specialty.values().sum::<usize>(), 50);
        assert_eq!(GenerationStats::from_records(&[]).total, 0);
    }
}
