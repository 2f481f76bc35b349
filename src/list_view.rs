pub(crate) struct ListView<T> {
  items: Vec<T>,
  offset: usize,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self {
      items: Vec::new(),
      offset: 0,
      selected: 0,
    }
  }
}

impl<T> ListView<T> {
  fn clamp(&mut self) {
    let last = self.items.len().saturating_sub(1);

    self.selected = self.selected.min(last);
    self.offset = self.offset.min(self.selected);
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn offset(&self) -> usize {
    self.offset
  }

  /// Swaps in fresh items, keeping the cursor at the same position when the
  /// new list is long enough.
  pub(crate) fn replace(&mut self, items: Vec<T>) {
    self.items = items;
    self.clamp();
  }

  pub(crate) fn select_by(&mut self, delta: isize) {
    let target = self.selected.saturating_add_signed(delta);

    self.set_selected(target);
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    (!self.items.is_empty()).then_some(self.selected)
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self.items.get(self.selected)
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    self.offset = offset;
    self.clamp();
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    self.selected = index;
    self.clamp();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn view<T>(items: Vec<T>) -> ListView<T> {
    let mut view = ListView::default();
    view.replace(items);
    view
  }

  #[test]
  fn selected_index_is_none_when_empty() {
    let view = ListView::<i32>::default();

    assert_eq!(view.selected_index(), None);
    assert!(view.selected_item().is_none());
  }

  #[test]
  fn selection_and_offset_are_clamped_to_bounds() {
    let mut view = view(vec![1, 2, 3]);

    view.set_selected(10);
    assert_eq!(view.selected_index(), Some(2));

    view.set_offset(10);
    assert_eq!(view.offset(), 2);
  }

  #[test]
  fn select_by_saturates_at_both_ends() {
    let mut view = view(vec!["a", "b", "c"]);

    view.select_by(-5);
    assert_eq!(view.selected_item(), Some(&"a"));

    view.select_by(1);
    assert_eq!(view.selected_item(), Some(&"b"));

    view.select_by(isize::MAX);
    assert_eq!(view.selected_item(), Some(&"c"));
  }

  #[test]
  fn replace_keeps_position_when_possible() {
    let mut view = view(vec![10, 20, 30]);

    view.set_selected(1);
    view.replace(vec![11, 21, 31, 41]);
    assert_eq!(view.selected_item(), Some(&21));

    view.set_selected(3);
    view.replace(vec![12]);
    assert_eq!(view.selected_index(), Some(0));
    assert_eq!(view.len(), 1);

    view.replace(Vec::new());
    assert!(view.is_empty());
    assert_eq!(view.offset(), 0);
  }
}
