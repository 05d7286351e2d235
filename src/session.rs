use crate::logger;
use crate::models::{AnswerRecord, Catalog, ItemId, Question, Test};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Questions shown per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("catalog contains no tests")]
    EmptyCatalog,
    #[error("unknown test {0}")]
    UnknownTest(ItemId),
    #[error("question {0} is not part of the active test")]
    UnknownQuestion(ItemId),
    #[error("option {option} does not belong to question {question}")]
    UnknownOption { question: ItemId, option: ItemId },
}

/// Everything that changes while a test is being taken.
///
/// Fields are only written through [`reduce`] / [`QuizSession::apply`], which
/// keeps `active_test` pointing at a catalog entry and `answers` keyed by the
/// active test's questions.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    active_test: ItemId,
    page: usize,
    answers: AnswerRecord,
    submitted: bool,
    selection_open: bool,
}

impl SessionState {
    /// First test of the catalog, page 0, nothing answered.
    pub fn initial(catalog: &Catalog) -> Result<Self, QuizError> {
        let first = catalog.first().ok_or(QuizError::EmptyCatalog)?;
        Ok(Self::fresh(first.id.clone()))
    }

    fn fresh(active_test: ItemId) -> Self {
        Self {
            active_test,
            page: 0,
            answers: AnswerRecord::new(),
            submitted: false,
            selection_open: false,
        }
    }

    pub fn active_test(&self) -> &ItemId {
        &self.active_test
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_selection_open(&self) -> bool {
        self.selection_open
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTest(ItemId),
    SelectAnswer { question: ItemId, option: ItemId },
    Submit,
    Reset,
    GoToPage(i64),
    NextPage,
    PreviousPage,
    ToggleSelectionPanel,
    CloseSelectionPanel,
}

/// How an option should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    /// Chosen, not yet graded.
    Selected,
    /// The right answer, shown once submitted.
    Correct,
    /// Chosen but wrong, shown once submitted.
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}

pub fn total_pages(test: &Test) -> usize {
    test.question_count().div_ceil(PAGE_SIZE)
}

pub fn page_questions(test: &Test, page: usize) -> &[Question] {
    let len = test.questions.len();
    let start = page.saturating_mul(PAGE_SIZE).min(len);
    let end = start.saturating_add(PAGE_SIZE).min(len);
    &test.questions[start..end]
}

fn clamp_page(test: &Test, requested: i64) -> usize {
    let last = total_pages(test).saturating_sub(1);
    if requested <= 0 {
        0
    } else {
        usize::try_from(requested).unwrap_or(usize::MAX).min(last)
    }
}

fn active_test<'a>(catalog: &'a Catalog, state: &SessionState) -> Result<&'a Test, QuizError> {
    catalog
        .test(&state.active_test)
        .ok_or_else(|| QuizError::UnknownTest(state.active_test.clone()))
}

/// Apply `action` to a copy of `state`. `state` itself is never touched, so a
/// rejected action leaves the caller with the previous state.
pub fn reduce(
    catalog: &Catalog,
    state: &SessionState,
    action: Action,
) -> Result<SessionState, QuizError> {
    let mut next = state.clone();
    transition(catalog, &mut next, action)?;
    Ok(next)
}

// Validates before writing: on Err, `state` is unchanged.
fn transition(catalog: &Catalog, state: &mut SessionState, action: Action) -> Result<(), QuizError> {
    match action {
        Action::SelectTest(test_id) => {
            if catalog.test(&test_id).is_none() {
                return Err(QuizError::UnknownTest(test_id));
            }
            *state = SessionState::fresh(test_id);
        }
        Action::SelectAnswer { question, option } => {
            if state.submitted {
                return Ok(());
            }
            let test = active_test(catalog, state)?;
            let Some(q) = test.question(&question) else {
                return Err(QuizError::UnknownQuestion(question));
            };
            if !q.has_option(&option) {
                return Err(QuizError::UnknownOption { question, option });
            }
            state.answers.insert(question, option);
        }
        Action::Submit => state.submitted = true,
        Action::Reset => {
            state.answers.clear();
            state.submitted = false;
            state.page = 0;
        }
        Action::GoToPage(n) => {
            let test = active_test(catalog, state)?;
            state.page = clamp_page(test, n);
        }
        Action::NextPage => {
            let test = active_test(catalog, state)?;
            state.page = clamp_page(test, state.page as i64 + 1);
        }
        Action::PreviousPage => {
            let test = active_test(catalog, state)?;
            state.page = clamp_page(test, state.page as i64 - 1);
        }
        Action::ToggleSelectionPanel => state.selection_open = !state.selection_open,
        Action::CloseSelectionPanel => state.selection_open = false,
    }
    Ok(())
}

/// Owns the session state for one catalog and exposes the transitions and
/// derived views the renderer needs.
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: Arc<Catalog>,
    state: SessionState,
}

impl QuizSession {
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, QuizError> {
        let state = SessionState::initial(&catalog)?;
        Ok(Self { catalog, state })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn apply(&mut self, action: Action) -> Result<(), QuizError> {
        let event = match &action {
            Action::SelectTest(_) => Some("Switched to"),
            Action::Submit => Some("Submitted"),
            Action::Reset => Some("Reset"),
            _ => None,
        };

        if let Err(e) = transition(&self.catalog, &mut self.state, action) {
            logger::log(&format!("Rejected action: {}", e));
            return Err(e);
        }

        if let Some(event) = event {
            logger::log(&format!(
                "{} '{}' (score {})",
                event,
                self.current_test().title,
                self.score_summary()
            ));
        }
        Ok(())
    }

    // Rejections are already logged by `apply`.
    fn dispatch(&mut self, action: Action) -> bool {
        self.apply(action).is_ok()
    }

    /// Switch to another test, discarding answers, submission and page.
    pub fn select_test(&mut self, test_id: &ItemId) -> Result<(), QuizError> {
        self.apply(Action::SelectTest(test_id.clone()))
    }

    /// Record `option_id` for `question_id`. Returns false when nothing was
    /// recorded: answers are frozen after submission, and ids outside the
    /// active test are ignored.
    pub fn select_answer(&mut self, question_id: &ItemId, option_id: &ItemId) -> bool {
        if self.state.submitted {
            return false;
        }
        self.dispatch(Action::SelectAnswer {
            question: question_id.clone(),
            option: option_id.clone(),
        })
    }

    pub fn submit(&mut self) {
        self.dispatch(Action::Submit);
    }

    /// Retake the active test.
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    pub fn go_to_page(&mut self, page: i64) {
        self.dispatch(Action::GoToPage(page));
    }

    pub fn next_page(&mut self) {
        self.dispatch(Action::NextPage);
    }

    pub fn previous_page(&mut self) {
        self.dispatch(Action::PreviousPage);
    }

    pub fn toggle_selection_panel(&mut self) {
        self.dispatch(Action::ToggleSelectionPanel);
    }

    pub fn close_selection_panel(&mut self) {
        self.dispatch(Action::CloseSelectionPanel);
    }

    pub fn current_test(&self) -> &Test {
        // `active_test` always names a catalog entry and the catalog is never empty.
        self.catalog
            .test(&self.state.active_test)
            .unwrap_or(&self.catalog.tests[0])
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.current_test())
    }

    pub fn current_page(&self) -> usize {
        self.state.page
    }

    /// Index of the first question of the current page within the test.
    pub fn page_offset(&self) -> usize {
        self.state.page * PAGE_SIZE
    }

    pub fn current_page_questions(&self) -> &[Question] {
        page_questions(self.current_test(), self.state.page)
    }

    pub fn has_previous_page(&self) -> bool {
        self.state.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.state.page + 1 < self.total_pages()
    }

    pub fn is_submitted(&self) -> bool {
        self.state.submitted
    }

    pub fn is_selection_open(&self) -> bool {
        self.state.selection_open
    }

    pub fn answered_count(&self) -> usize {
        self.state.answers.len()
    }

    pub fn selected_option(&self, question_id: &ItemId) -> Option<&ItemId> {
        self.state.answers.get(question_id)
    }

    pub fn is_selected(&self, question_id: &ItemId, option_id: &ItemId) -> bool {
        self.selected_option(question_id) == Some(option_id)
    }

    /// Whether the recorded answer for `question_id` is the right one.
    /// Unanswered questions count as wrong.
    pub fn is_correct(&self, question_id: &ItemId) -> bool {
        self.current_test()
            .question(question_id)
            .is_some_and(|q| self.selected_option(&q.id) == Some(&q.correct_answer))
    }

    /// Number of correctly answered questions in the active test. Computed
    /// from the live selections whether or not the test was submitted.
    pub fn score(&self) -> usize {
        self.current_test()
            .questions
            .iter()
            .filter(|q| self.selected_option(&q.id) == Some(&q.correct_answer))
            .count()
    }

    /// Graded result, available only after submission.
    pub fn result(&self) -> Option<Score> {
        self.state.submitted.then(|| self.score_summary())
    }

    fn score_summary(&self) -> Score {
        Score {
            correct: self.score(),
            total: self.current_test().question_count(),
        }
    }

    pub fn option_mark(&self, question: &Question, option_id: &ItemId) -> OptionMark {
        let selected = self.is_selected(&question.id, option_id);
        if self.state.submitted {
            if question.is_correct_option(option_id) {
                OptionMark::Correct
            } else if selected {
                OptionMark::Incorrect
            } else {
                OptionMark::Neutral
            }
        } else if selected {
            OptionMark::Selected
        } else {
            OptionMark::Neutral
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{QuizOption, Test};

    pub(crate) fn make_test(id: i64, title: &str, question_count: usize) -> Test {
        let questions = (0..question_count)
            .map(|i| Question {
                id: ItemId::Number(i as i64 + 1),
                text: format!("{} question {}", title, i + 1),
                options: ["a", "b", "c"]
                    .iter()
                    .map(|o| QuizOption {
                        id: ItemId::from(*o),
                        text: format!("Option {}", o.to_uppercase()),
                    })
                    .collect(),
                correct_answer: ItemId::from(["a", "b", "c"][i % 3]),
            })
            .collect();
        Test {
            id: ItemId::Number(id),
            title: title.to_string(),
            questions,
        }
    }

    pub(crate) fn make_session() -> QuizSession {
        let catalog = Catalog {
            tests: vec![
                make_test(1, "Fifteen", 15),
                make_test(2, "Three", 3),
                make_test(3, "Twenty", 20),
            ],
        };
        QuizSession::new(Arc::new(catalog)).unwrap()
    }

    fn answer_all_correctly(session: &mut QuizSession) {
        let answers: Vec<(ItemId, ItemId)> = session
            .current_test()
            .questions
            .iter()
            .map(|q| (q.id.clone(), q.correct_answer.clone()))
            .collect();
        for (q, o) in answers {
            assert!(session.select_answer(&q, &o));
        }
    }

    #[test]
    fn test_initial_state() {
        let session = make_session();
        assert_eq!(session.current_test().title, "Fifteen");
        assert_eq!(session.current_page(), 0);
        assert_eq!(session.answered_count(), 0);
        assert!(!session.is_submitted());
        assert!(!session.is_selection_open());
    }

    #[test]
    fn test_new_session_rejects_empty_catalog() {
        let result = QuizSession::new(Arc::new(Catalog { tests: vec![] }));
        assert!(matches!(result, Err(QuizError::EmptyCatalog)));
    }

    #[test]
    fn test_select_test_yields_that_test() {
        let mut session = make_session();
        let ids: Vec<ItemId> = session.catalog().tests.iter().map(|t| t.id.clone()).collect();
        for id in ids {
            session.select_test(&id).unwrap();
            assert_eq!(session.current_test().id, id);
        }
    }

    #[test]
    fn test_select_unknown_test_leaves_state_untouched() {
        let mut session = make_session();
        session.select_answer(&1.into(), &"a".into());
        session.go_to_page(1);
        let before = session.state().clone();

        let result = session.select_test(&"nope".into());
        assert_eq!(result, Err(QuizError::UnknownTest("nope".into())));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_select_test_resets_everything() {
        let mut session = make_session();
        session.select_answer(&1.into(), &"a".into());
        session.go_to_page(1);
        session.toggle_selection_panel();
        session.submit();

        session.select_test(&2.into()).unwrap();
        assert_eq!(session.current_page(), 0);
        assert_eq!(session.answered_count(), 0);
        assert!(!session.is_submitted());
        assert!(!session.is_selection_open());
    }

    #[test]
    fn test_switching_back_discards_earlier_answers() {
        let mut session = make_session();
        session.select_answer(&1.into(), &"a".into());
        session.select_answer(&2.into(), &"b".into());
        session.submit();

        session.select_test(&2.into()).unwrap();
        session.select_test(&1.into()).unwrap();
        assert!(!session.is_submitted());
        assert!(session.state().answers().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_selecting_active_test_again_restarts_it() {
        let mut session = make_session();
        session.select_answer(&1.into(), &"a".into());
        session.submit();

        session.select_test(&1.into()).unwrap();
        assert!(!session.is_submitted());
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn test_select_answer_is_idempotent() {
        let mut once = make_session();
        once.select_answer(&3.into(), &"b".into());

        let mut twice = make_session();
        twice.select_answer(&3.into(), &"b".into());
        twice.select_answer(&3.into(), &"b".into());

        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_select_answer_overwrites_previous_choice() {
        let mut session = make_session();
        session.select_answer(&3.into(), &"a".into());
        session.select_answer(&3.into(), &"c".into());
        assert_eq!(session.selected_option(&3.into()), Some(&"c".into()));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_select_answer_after_submit_is_noop() {
        let mut session = make_session();
        session.select_answer(&1.into(), &"a".into());
        session.submit();
        let before = session.state().answers().clone();

        assert!(!session.select_answer(&1.into(), &"b".into()));
        assert!(!session.select_answer(&2.into(), &"b".into()));
        assert_eq!(session.state().answers(), &before);
    }

    #[test]
    fn test_select_answer_ignores_foreign_ids() {
        let mut session = make_session();
        // Question 16 only exists in the twenty-question test.
        assert!(!session.select_answer(&16.into(), &"a".into()));
        assert!(!session.select_answer(&1.into(), &"z".into()));
        assert!(!session.select_answer(&"1".into(), &"a".into()));
        assert!(session.state().answers().is_empty());
    }

    #[test]
    fn test_apply_reports_foreign_ids() {
        let mut session = make_session();
        assert_eq!(
            session.apply(Action::SelectAnswer {
                question: 99.into(),
                option: "a".into(),
            }),
            Err(QuizError::UnknownQuestion(99.into()))
        );
        assert_eq!(
            session.apply(Action::SelectAnswer {
                question: 1.into(),
                option: "d".into(),
            }),
            Err(QuizError::UnknownOption {
                question: 1.into(),
                option: "d".into(),
            })
        );
    }

    #[test]
    fn test_reset_always_clears() {
        let mut session = make_session();
        session.select_answer(&1.into(), &"a".into());
        session.go_to_page(1);
        session.toggle_selection_panel();
        session.submit();

        session.reset();
        assert!(!session.is_submitted());
        assert!(session.state().answers().is_empty());
        assert_eq!(session.current_page(), 0);
        assert_eq!(session.current_test().title, "Fifteen");
        assert!(session.is_selection_open());

        session.reset();
        assert!(!session.is_submitted());
        assert_eq!(session.current_page(), 0);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let session = make_session();
        let expected = [2, 1, 2];
        for (test, pages) in session.catalog().tests.iter().zip(expected) {
            assert_eq!(total_pages(test), pages);
            assert_eq!(total_pages(test), test.questions.len().div_ceil(10));
        }
        assert_eq!(total_pages(&make_test(9, "Ten", 10)), 1);
        assert_eq!(total_pages(&make_test(9, "Eleven", 11)), 2);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut session = make_session();
        for (requested, expected) in [
            (-1, 0),
            (i64::MIN, 0),
            (0, 0),
            (1, 1),
            (2, 1),
            (1_000_000, 1),
            (i64::MAX, 1),
        ] {
            session.go_to_page(requested);
            assert_eq!(session.current_page(), expected, "requested {}", requested);
        }
    }

    #[test]
    fn test_single_page_test_never_leaves_page_zero() {
        let mut session = make_session();
        session.select_test(&2.into()).unwrap();
        session.go_to_page(5);
        assert_eq!(session.current_page(), 0);
        session.next_page();
        assert_eq!(session.current_page(), 0);
        assert!(!session.has_next_page());
        assert!(!session.has_previous_page());
    }

    #[test]
    fn test_next_and_previous_page_stop_at_bounds() {
        let mut session = make_session();
        session.previous_page();
        assert_eq!(session.current_page(), 0);
        assert!(session.has_next_page());

        session.next_page();
        session.next_page();
        assert_eq!(session.current_page(), 1);
        assert!(!session.has_next_page());
        assert!(session.has_previous_page());

        session.previous_page();
        assert_eq!(session.current_page(), 0);
    }

    #[test]
    fn test_paging_allowed_after_submit() {
        let mut session = make_session();
        session.submit();
        session.go_to_page(1);
        assert_eq!(session.current_page(), 1);
        assert!(session.is_submitted());
    }

    #[test]
    fn test_fifteen_question_scenario() {
        let mut session = make_session();
        session.select_test(&1.into()).unwrap();
        assert_eq!(session.total_pages(), 2);

        session.go_to_page(1);
        let page = session.current_page_questions();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].id, ItemId::Number(11));
        assert_eq!(page[4].id, ItemId::Number(15));
        assert_eq!(session.page_offset(), 10);

        answer_all_correctly(&mut session);
        session.submit();
        assert_eq!(session.score(), 15);
        assert_eq!(
            session.result(),
            Some(Score {
                correct: 15,
                total: 15
            })
        );
    }

    #[test]
    fn test_first_page_has_ten_questions() {
        let session = make_session();
        let page = session.current_page_questions();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].id, ItemId::Number(1));
        assert_eq!(page[9].id, ItemId::Number(10));
    }

    #[test]
    fn test_submit_without_answers_scores_zero() {
        let mut session = make_session();
        session.submit();
        assert_eq!(session.score(), 0);
        assert_eq!(session.result().unwrap().to_string(), "0 / 15");

        let question = session.current_test().questions[0].clone();
        for option in &question.options {
            let mark = session.option_mark(&question, &option.id);
            if question.is_correct_option(&option.id) {
                assert_eq!(mark, OptionMark::Correct);
            } else {
                assert_eq!(mark, OptionMark::Neutral);
            }
        }
        assert!(!session.is_correct(&question.id));
    }

    #[test]
    fn test_option_marks_before_and_after_submit() {
        let mut session = make_session();
        let question = session.current_test().questions[0].clone();
        // correct answer for question 1 is "a"
        session.select_answer(&question.id, &"b".into());

        assert_eq!(session.option_mark(&question, &"a".into()), OptionMark::Neutral);
        assert_eq!(session.option_mark(&question, &"b".into()), OptionMark::Selected);

        session.submit();
        assert_eq!(session.option_mark(&question, &"a".into()), OptionMark::Correct);
        assert_eq!(session.option_mark(&question, &"b".into()), OptionMark::Incorrect);
        assert_eq!(session.option_mark(&question, &"c".into()), OptionMark::Neutral);
    }

    #[test]
    fn test_is_correct_and_is_selected() {
        let mut session = make_session();
        session.select_answer(&1.into(), &"a".into());
        session.select_answer(&2.into(), &"a".into());

        assert!(session.is_correct(&1.into()));
        assert!(!session.is_correct(&2.into()));
        assert!(!session.is_correct(&3.into()));
        assert!(session.is_selected(&2.into(), &"a".into()));
        assert!(!session.is_selected(&2.into(), &"b".into()));
    }

    #[test]
    fn test_score_grows_with_correct_answers() {
        let mut session = make_session();
        let questions = session.current_test().questions.clone();
        let mut last = session.score();
        for q in &questions {
            session.select_answer(&q.id, &q.correct_answer);
            let now = session.score();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 15);
    }

    #[test]
    fn test_result_is_gated_on_submission() {
        let mut session = make_session();
        session.select_answer(&1.into(), &"a".into());
        assert_eq!(session.score(), 1);
        assert!(session.result().is_none());

        session.submit();
        assert_eq!(session.result().map(|s| s.correct), Some(1));
    }

    #[test]
    fn test_toggle_selection_panel_touches_nothing_else() {
        let mut session = make_session();
        session.select_answer(&1.into(), &"a".into());
        session.go_to_page(1);
        let answers = session.state().answers().clone();

        session.toggle_selection_panel();
        assert!(session.is_selection_open());
        session.toggle_selection_panel();
        assert!(!session.is_selection_open());
        assert_eq!(session.state().answers(), &answers);
        assert_eq!(session.current_page(), 1);

        session.toggle_selection_panel();
        session.close_selection_panel();
        assert!(!session.is_selection_open());
    }

    #[test]
    fn test_reduce_is_pure() {
        let session = make_session();
        let catalog = session.catalog();
        let start = session.state().clone();

        let next = reduce(
            catalog,
            &start,
            Action::SelectAnswer {
                question: 1.into(),
                option: "a".into(),
            },
        )
        .unwrap();
        assert!(start.answers().is_empty());
        assert_eq!(next.answers().get(&1.into()), Some(&"a".into()));

        let submitted = reduce(catalog, &next, Action::Submit).unwrap();
        let frozen = reduce(
            catalog,
            &submitted,
            Action::SelectAnswer {
                question: 1.into(),
                option: "b".into(),
            },
        )
        .unwrap();
        assert_eq!(frozen, submitted);

        let reset = reduce(catalog, &frozen, Action::Reset).unwrap();
        assert!(!reset.is_submitted());
        assert!(reset.answers().is_empty());

        assert!(reduce(catalog, &reset, Action::SelectTest(42.into())).is_err());
    }

    #[test]
    fn test_reduce_paging_actions() {
        let session = make_session();
        let catalog = session.catalog();
        let state = session.state().clone();

        let far = reduce(catalog, &state, Action::GoToPage(99)).unwrap();
        assert_eq!(far.page(), 1);
        let next = reduce(catalog, &far, Action::NextPage).unwrap();
        assert_eq!(next.page(), 1);
        let prev = reduce(catalog, &next, Action::PreviousPage).unwrap();
        assert_eq!(prev.page(), 0);
        let open = reduce(catalog, &prev, Action::ToggleSelectionPanel).unwrap();
        assert!(open.is_selection_open());
        let closed = reduce(catalog, &open, Action::CloseSelectionPanel).unwrap();
        assert!(!closed.is_selection_open());
    }

    #[test]
    fn test_apply_matches_methods() {
        let mut via_apply = make_session();
        via_apply.apply(Action::SelectTest(3.into())).unwrap();
        via_apply.apply(Action::GoToPage(1)).unwrap();
        via_apply
            .apply(Action::SelectAnswer {
                question: 12.into(),
                option: "c".into(),
            })
            .unwrap();
        via_apply.apply(Action::Submit).unwrap();

        let mut via_methods = make_session();
        via_methods.select_test(&3.into()).unwrap();
        via_methods.go_to_page(1);
        via_methods.select_answer(&12.into(), &"c".into());
        via_methods.submit();

        assert_eq!(via_apply.state(), via_methods.state());
    }
}
